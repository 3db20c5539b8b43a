//! Minimal HTTP/1.1 server answering HEAD/GET for a mutable set of paths.
//!
//! Present paths respond 200 with a tiny body; everything else is 404. Paths
//! can be added while the server runs to exercise tier upgrades across
//! resolution passes.

use std::collections::HashSet;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

const BODY: &[u8] = b"ok";

#[derive(Clone)]
pub struct ProbeServer {
    base_url: String,
    paths: Arc<Mutex<HashSet<String>>>,
}

impl ProbeServer {
    /// Starts a server on an ephemeral port serving `paths`. Runs until the
    /// process exits.
    pub fn start(paths: &[&str]) -> ProbeServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let set: Arc<Mutex<HashSet<String>>> =
            Arc::new(Mutex::new(paths.iter().map(|p| normalize(p)).collect()));
        let accept_set = Arc::clone(&set);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let set = Arc::clone(&accept_set);
                thread::spawn(move || handle(stream, &set));
            }
        });
        ProbeServer {
            base_url: format!("http://127.0.0.1:{}/", port),
            paths: set,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes `path` exist for subsequent requests.
    pub fn add_path(&self, path: &str) {
        self.paths.lock().unwrap().insert(normalize(path));
    }
}

fn normalize(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

fn handle(mut stream: TcpStream, paths: &Mutex<HashSet<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.split_whitespace();
    let (method, path) = match (parts.next(), parts.next()) {
        (Some(m), Some(p)) => (m, p),
        _ => return,
    };

    let found = paths.lock().unwrap().contains(path);
    if !found {
        let _ = stream
            .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    let header = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nLast-Modified: Thu, 01 Jan 2026 00:00:00 GMT\r\nConnection: close\r\n\r\n",
        BODY.len()
    );
    let _ = stream.write_all(header.as_bytes());
    if method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(BODY);
    }
    let _ = stream.flush();
}
