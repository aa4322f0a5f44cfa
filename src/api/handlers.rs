// Route handlers module
// One function per route, each returning the canned record for that route

use std::collections::BTreeMap;

use super::types::{
    BandwidthStats, BlockStat, FilesStat, IdOutput, LogLevelMessage, PeerStats, PinListKey,
    PinListResp, PinLsList, RepoInfo, SizeStat, StatsBitswap,
};

/// Content identifier reported by both pin/ls and files/stat
pub const MOCK_CID: &str = "QmcwQBzZcFVa7gyEQazd9WryzXKVMK2TvwBweruBZhy3pf";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub fn pin_ls() -> PinListResp {
    let mut keys = BTreeMap::new();
    keys.insert(
        MOCK_CID.to_string(),
        PinListKey {
            pin_type: "direct".to_string(),
        },
    );
    PinListResp {
        pin_ls_list: PinLsList { keys },
    }
}

pub fn repo_stat() -> RepoInfo {
    RepoInfo {
        num_objects: 42,
        repo_path: "/mock/path".to_string(),
        size_stat: SizeStat {
            repo_size: 123_456_789,
            storage_max: 987_654_321,
        },
        version: "1.0.0".to_string(),
        repo_size: 123_456_789,
    }
}

/// `SizeLocal` and `WithLocality` stay at their defaults and are omitted on the wire
pub fn files_stat() -> FilesStat {
    FilesStat {
        blocks: 3,
        cumulative_size: 654_321,
        hash: MOCK_CID.to_string(),
        local: true,
        size: 12_345,
        size_local: 0,
        file_type: "directory".to_string(),
        with_locality: false,
    }
}

pub fn bitswap_stat() -> StatsBitswap {
    StatsBitswap {
        blocks_received: 10,
        blocks_sent: 5,
        data_received: 2048,
        data_sent: 1024,
        dup_blks_received: 2,
        dup_data_received: 512,
        messages_received: 15,
        peers: strings(&["peer1", "peer2"]),
        provide_buf_len: 0,
        wantlist: strings(&["item1", "item2"]),
    }
}

pub fn bitswap_ledger() -> PeerStats {
    PeerStats {
        exchanged: 0,
        peer: "mockPeerID".to_string(),
        recv: 0,
        sent: 0,
        value: 0.0,
    }
}

pub fn block_stat() -> BlockStat {
    BlockStat {
        key: "exampleKey".to_string(),
        size: 256,
    }
}

pub fn id() -> IdOutput {
    IdOutput {
        addresses: strings(&["mockAddress1", "mockAddress2"]),
        agent_version: "mockAgentVersion".to_string(),
        id: "mockID".to_string(),
        protocol_version: "mockProtocolVersion".to_string(),
        protocols: strings(&["mockProtocol1", "mockProtocol2"]),
        public_key: "mockPublicKey".to_string(),
    }
}

pub fn log_level() -> LogLevelMessage {
    LogLevelMessage {
        message: "Log level set".to_string(),
    }
}

pub fn bandwidth_stat() -> BandwidthStats {
    BandwidthStats {
        total_in: 1024,
        total_out: 2048,
        rate_in: 1.5,
        rate_out: 2.5,
    }
}
