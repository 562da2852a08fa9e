//! Token Types
//!
//! Core data structures for directory entries. Field names serialize in
//! camelCase, the shape the calling layer marshals over the wire.

use serde::{Deserialize, Serialize};

use crate::time::TimestampNanos;

/// Ledger asset identifier, the registry's primary key
pub type AssetId = u64;

/// A registered fungible token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FungibleToken {
    /// Asset id on the ledger of record (unique)
    pub asset_id: AssetId,
    /// Ticker symbol (unique, case-sensitive)
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Logo as a base64 image data URI
    pub logo: String,
    /// Registration time, immutable afterwards
    pub created_at: TimestampNanos,
    /// Updated on every successful mutation of this token
    pub modified_at: TimestampNanos,
}

/// Input for registering a new token
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayload {
    pub asset_id: AssetId,
    pub symbol: String,
    pub name: String,
    pub logo: String,
}

/// Partial update of the non-key presentation fields.
///
/// Absent fields are left unchanged; there is no sentinel-value
/// convention.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdatePayload {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub logo: Option<String>,
}
