//! Ledger Validator
//!
//! Contract presented by the external ledger of record. The registry
//! consults it before admitting a new token and treats both a negative
//! answer and a failed query as hard admission failures, in that order of
//! specificity. Implementations live with the host (an RPC client in
//! production, an in-memory table in tests).

use async_trait::async_trait;

use crate::token::AssetId;

/// Existence query against the ledger of record
#[async_trait]
pub trait LedgerValidator: Send + Sync {
    /// Whether `asset_id` is known to the ledger.
    ///
    /// `Err` means the question could not be answered, not that the asset
    /// is absent.
    async fn asset_exists(&self, asset_id: AssetId) -> anyhow::Result<bool>;
}
