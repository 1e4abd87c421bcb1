pub mod config;
pub mod driver;
pub mod error;
pub mod format;
pub mod logging;
pub mod signals;

pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
