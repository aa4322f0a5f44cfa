// Connection handling module
// Serves one accepted TCP connection on its own task

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use hyper::body::{Body, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Version};
use hyper_util::rt::TokioIo;

use crate::api;
use crate::config::Config;
use crate::logger::{self, AccessLogEntry};

/// Spawn a task serving HTTP/1.1 on `stream`.
///
/// Requests on the connection are handled independently; nothing is shared
/// between connections besides the read-only config.
pub fn accept_connection(stream: tokio::net::TcpStream, peer_addr: SocketAddr, config: &Arc<Config>) {
    let config = Arc::clone(config);

    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(config.performance.keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req: Request<Incoming>| {
                let config = Arc::clone(&config);
                async move {
                    if !config.logging.access_log {
                        return api::handle_request(req).await;
                    }

                    let started = Instant::now();
                    let mut entry = access_entry(&req, peer_addr);
                    let resp = api::handle_request(req).await?;

                    entry.status = resp.status().as_u16();
                    entry.body_bytes = resp
                        .body()
                        .size_hint()
                        .exact()
                        .and_then(|n| usize::try_from(n).ok())
                        .unwrap_or(0);
                    entry.request_time_us =
                        u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
                    logger::log_access(&entry, &config.logging.access_log_format);

                    Ok(resp)
                }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

fn access_entry(req: &Request<Incoming>, peer_addr: SocketAddr) -> AccessLogEntry {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.query = req.uri().query().map(ToString::to_string);
    entry.http_version = version_label(req.version()).to_string();
    entry.user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);
    entry
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}
