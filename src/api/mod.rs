// API module entry
// Route table of the emulated node API: exact path match -> canned JSON

mod handlers;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::convert::Infallible;

use crate::http;

/// Every route the mock answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    PinLs,
    StatsRepo,
    FilesStat,
    StatsBitswap,
    BitswapLedger,
    BlockStat,
    Id,
    LogLevel,
    StatsBw,
}

impl Endpoint {
    pub const ALL: [Self; 9] = [
        Self::PinLs,
        Self::StatsRepo,
        Self::FilesStat,
        Self::StatsBitswap,
        Self::BitswapLedger,
        Self::BlockStat,
        Self::Id,
        Self::LogLevel,
        Self::StatsBw,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::PinLs => "/api/v0/pin/ls",
            Self::StatsRepo => "/api/v0/stats/repo",
            Self::FilesStat => "/api/v0/files/stat",
            Self::StatsBitswap => "/api/v0/stats/bitswap",
            Self::BitswapLedger => "/api/v0/bitswap/ledger",
            Self::BlockStat => "/api/v0/block/stat",
            Self::Id => "/api/v0/id",
            Self::LogLevel => "/api/v0/log/level",
            Self::StatsBw => "/api/v0/stats/bw",
        }
    }

    /// Build the fixed response for this route
    pub fn respond(self) -> Response<Full<Bytes>> {
        match self {
            Self::PinLs => http::build_json_response(&handlers::pin_ls()),
            Self::StatsRepo => http::build_json_response(&handlers::repo_stat()),
            Self::FilesStat => http::build_json_response(&handlers::files_stat()),
            Self::StatsBitswap => http::build_json_response(&handlers::bitswap_stat()),
            Self::BitswapLedger => http::build_json_response(&handlers::bitswap_ledger()),
            Self::BlockStat => http::build_json_response(&handlers::block_stat()),
            Self::Id => http::build_json_response(&handlers::id()),
            Self::LogLevel => http::build_json_response(&handlers::log_level()),
            Self::StatsBw => http::build_json_response(&handlers::bandwidth_stat()),
        }
    }
}

/// Resolve a request path to a route (exact match only)
pub fn route(path: &str) -> Option<Endpoint> {
    Endpoint::ALL.into_iter().find(|e| e.path() == path)
}

/// API route handler
///
/// Method, headers, query and body are ignored; only the path selects the response.
#[allow(clippy::unused_async)]
pub async fn handle_request<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible> {
    let response = match route(req.uri().path()) {
        Some(endpoint) => endpoint.respond(),
        None => http::build_404_response(),
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::handlers::MOCK_CID;
    use super::*;
    use http_body_util::BodyExt;
    use hyper::Method;
    use serde_json::{json, Value};

    async fn call(method: Method, uri: &str) -> (u16, Vec<u8>) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .unwrap();
        let resp = handle_request(req).await.unwrap();
        let status = resp.status().as_u16();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> Value {
        let (status, body) = call(Method::GET, uri).await;
        assert_eq!(status, 200, "unexpected status for {uri}");
        serde_json::from_slice(&body).unwrap()
    }

    #[test]
    fn test_route_table() {
        for endpoint in Endpoint::ALL {
            assert_eq!(route(endpoint.path()), Some(endpoint));
        }
        assert_eq!(route("/api/v0/nonexistent"), None);
        assert_eq!(route("/api/v0/id/"), None);
        assert_eq!(route("/api/v0"), None);
        assert_eq!(route("/"), None);
    }

    #[tokio::test]
    async fn test_unclean_paths_not_normalized() {
        for path in ["/api/v0/./id", "/api/v0//id", "/api/v0/pin/../id"] {
            assert_eq!(route(path), None, "{path}");
            let (status, _) = call(Method::GET, path).await;
            assert_eq!(status, 404, "{path}");
        }
    }

    #[tokio::test]
    async fn test_pin_ls() {
        let value = get_json("/api/v0/pin/ls").await;
        let keys = value["PinLsList"]["Keys"].as_object().unwrap();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[MOCK_CID], json!({"Type": "direct"}));
    }

    #[tokio::test]
    async fn test_stats_repo() {
        let value = get_json("/api/v0/stats/repo").await;
        assert_eq!(
            value,
            json!({
                "NumObjects": 42,
                "RepoPath": "/mock/path",
                "SizeStat": {"RepoSize": 123_456_789, "StorageMax": 987_654_321},
                "Version": "1.0.0",
                "RepoSize": 123_456_789
            })
        );
    }

    #[tokio::test]
    async fn test_files_stat() {
        let value = get_json("/api/v0/files/stat").await;
        assert_eq!(
            value,
            json!({
                "Blocks": 3,
                "CumulativeSize": 654_321,
                "Hash": MOCK_CID,
                "Local": true,
                "Size": 12_345,
                "Type": "directory"
            })
        );
    }

    #[tokio::test]
    async fn test_stats_bitswap() {
        let value = get_json("/api/v0/stats/bitswap").await;
        assert_eq!(
            value,
            json!({
                "BlocksReceived": 10,
                "BlocksSent": 5,
                "DataReceived": 2048,
                "DataSent": 1024,
                "DupBlksReceived": 2,
                "DupDataReceived": 512,
                "MessagesReceived": 15,
                "Peers": ["peer1", "peer2"],
                "ProvideBufLen": 0,
                "Wantlist": ["item1", "item2"]
            })
        );
    }

    #[tokio::test]
    async fn test_bitswap_ledger() {
        let value = get_json("/api/v0/bitswap/ledger").await;
        assert_eq!(value["Peer"], "mockPeerID");
        assert_eq!(value["Exchanged"], 0);
        assert_eq!(value["Recv"], 0);
        assert_eq!(value["Sent"], 0);
        assert_eq!(value["Value"], 0);
    }

    #[tokio::test]
    async fn test_block_stat() {
        let value = get_json("/api/v0/block/stat").await;
        assert_eq!(value, json!({"Key": "exampleKey", "Size": 256}));
    }

    #[tokio::test]
    async fn test_id() {
        let value = get_json("/api/v0/id").await;
        assert_eq!(value["ID"], "mockID");
        assert_eq!(value["Protocols"], json!(["mockProtocol1", "mockProtocol2"]));
        assert_eq!(value["Addresses"], json!(["mockAddress1", "mockAddress2"]));
        assert_eq!(value["AgentVersion"], "mockAgentVersion");
        assert_eq!(value["ProtocolVersion"], "mockProtocolVersion");
        assert_eq!(value["PublicKey"], "mockPublicKey");
    }

    #[tokio::test]
    async fn test_log_level() {
        let value = get_json("/api/v0/log/level").await;
        assert_eq!(value, json!({"Message": "Log level set"}));
    }

    #[tokio::test]
    async fn test_stats_bw() {
        let value = get_json("/api/v0/stats/bw").await;
        assert_eq!(
            value,
            json!({"TotalIn": 1024, "TotalOut": 2048, "RateIn": 1.5, "RateOut": 2.5})
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, body) = call(Method::GET, "/api/v0/nonexistent").await;
        assert_eq!(status, 404);
        assert_eq!(body, b"404 page not found\n");
    }

    #[tokio::test]
    async fn test_method_and_query_ignored() {
        let (_, get_body) = call(Method::GET, "/api/v0/block/stat").await;
        let (status, post_body) = call(Method::POST, "/api/v0/block/stat?arg=QmOther").await;
        assert_eq!(status, 200);
        assert_eq!(get_body, post_body);
    }

    #[tokio::test]
    async fn test_repeated_calls_identical() {
        for endpoint in Endpoint::ALL {
            let (_, first) = call(Method::GET, endpoint.path()).await;
            let (_, second) = call(Method::GET, endpoint.path()).await;
            assert_eq!(first, second, "{} changed between calls", endpoint.path());
            assert_eq!(first.last(), Some(&b'\n'));
        }
    }
}
