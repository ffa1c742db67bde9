pub mod classify;
pub mod config;
pub mod error;
pub mod reporter;
pub mod rules;
pub mod scan;
pub mod walker;

use config::LinterConfig;
use scan::Report;

/// Run a full scan on a single-threaded runtime.
pub fn run_scan(config: &LinterConfig) -> std::io::Result<Report> {
    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    Ok(runtime.block_on(scan::scan(config)))
}
