pub mod candidate;
pub mod config;
pub mod logging;
pub mod probe;
pub mod release;
pub mod resolver;
pub mod target;
pub mod watch;
