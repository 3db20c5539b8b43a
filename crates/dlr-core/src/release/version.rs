//! Dotted numeric version comparison for release tags.

/// True if `latest` is strictly newer than `current`.
///
/// Compares up to three dotted numeric components; missing components count
/// as zero and non-numeric components are ignored. A leading `v` is accepted
/// on either side.
pub fn is_newer(current: &str, latest: &str) -> bool {
    let cur = parts(current);
    let lat = parts(latest);
    for i in 0..3 {
        let c = cur.get(i).copied().unwrap_or(0);
        let l = lat.get(i).copied().unwrap_or(0);
        if l > c {
            return true;
        }
        if l < c {
            return false;
        }
    }
    false
}

fn parts(version: &str) -> Vec<u32> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .filter_map(|s| s.parse().ok())
        .collect()
}
