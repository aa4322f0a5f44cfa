// API response types module
// Wire records of the emulated node API. Field names follow the node's JSON casing.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(b: &bool) -> bool {
    !*b
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &u64) -> bool {
    *n == 0
}

/// Whole floats go out without a fractional part (`0`, not `0.0`), as the node writes them
#[allow(
    clippy::trivially_copy_pass_by_ref,
    clippy::cast_possible_truncation,
    clippy::float_cmp
)]
fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// `/api/v0/pin/ls`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinListResp {
    pub pin_ls_list: PinLsList,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinLsList {
    /// Content identifier -> pin record
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub keys: BTreeMap<String, PinListKey>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinListKey {
    #[serde(rename = "Type")]
    pub pin_type: String,
}

/// `/api/v0/stats/repo`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RepoInfo {
    pub num_objects: u64,
    pub repo_path: String,
    pub size_stat: SizeStat,
    pub version: String,
    pub repo_size: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SizeStat {
    pub repo_size: u64,
    pub storage_max: u64,
}

/// `/api/v0/files/stat`
///
/// `Local`, `SizeLocal` and `WithLocality` are left out when false/zero,
/// the other fields are always present.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilesStat {
    pub blocks: i64,
    pub cumulative_size: u64,
    pub hash: String,
    #[serde(skip_serializing_if = "is_false")]
    pub local: bool,
    pub size: u64,
    #[serde(skip_serializing_if = "is_zero")]
    pub size_local: u64,
    #[serde(rename = "Type")]
    pub file_type: String,
    #[serde(skip_serializing_if = "is_false")]
    pub with_locality: bool,
}

/// `/api/v0/stats/bitswap`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatsBitswap {
    pub blocks_received: u64,
    pub blocks_sent: u64,
    pub data_received: u64,
    pub data_sent: u64,
    pub dup_blks_received: u64,
    pub dup_data_received: u64,
    pub messages_received: u64,
    pub peers: Vec<String>,
    pub provide_buf_len: i64,
    pub wantlist: Vec<String>,
}

/// `/api/v0/bitswap/ledger`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PeerStats {
    pub exchanged: u64,
    pub peer: String,
    pub recv: u64,
    pub sent: u64,
    #[serde(serialize_with = "serialize_float")]
    pub value: f64,
}

/// `/api/v0/block/stat`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockStat {
    pub key: String,
    pub size: i64,
}

/// `/api/v0/id`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdOutput {
    pub addresses: Vec<String>,
    pub agent_version: String,
    #[serde(rename = "ID")]
    pub id: String,
    pub protocol_version: String,
    pub protocols: Vec<String>,
    pub public_key: String,
}

/// `/api/v0/log/level`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogLevelMessage {
    pub message: String,
}

/// `/api/v0/stats/bw`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BandwidthStats {
    pub total_in: i64,
    pub total_out: i64,
    #[serde(serialize_with = "serialize_float")]
    pub rate_in: f64,
    #[serde(serialize_with = "serialize_float")]
    pub rate_out: f64,
}
