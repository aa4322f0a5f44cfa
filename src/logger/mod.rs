//! Logger module
//!
//! Provides logging utilities for the mock server:
//! - Startup banner
//! - Access logging in several formats
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::api::Endpoint;
use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    for line in startup_banner(addr, config) {
        write_info(&line);
    }
}

fn startup_banner(addr: &SocketAddr, config: &Config) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Mock IPFS server running on http://localhost:{}",
            addr.port()
        ),
        format!("Bound to: {addr}"),
    ];
    if let Some(workers) = config.server.workers {
        lines.push(format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        lines.push(format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        lines.push(format!("Error log: {path}"));
    }
    lines.extend(
        Endpoint::ALL
            .iter()
            .map(|endpoint| format!("  - {}", endpoint.path())),
    );
    lines
}

/// Warn when `logging.access_log_format` is not a supported layout.
///
/// Such entries are written in `combined`. Returns whether a warning was logged.
pub fn warn_unknown_access_format(config: &Config) -> bool {
    let format = &config.logging.access_log_format;
    if AccessLogEntry::is_known_format(format) {
        return false;
    }
    log_warning(&format!(
        "Unknown access_log_format '{format}', using combined"
    ));
    true
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}
