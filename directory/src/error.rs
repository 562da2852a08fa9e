//! Directory Error Codes
//!
//! One variant per distinguishable failure; the calling layer maps each
//! kind to a user-facing message.

use thiserror::Error;

use crate::token::AssetId;

/// Directory operation result type
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory error type
#[derive(Debug, Error)]
pub enum DirectoryError {
    // ========================================
    // Authorization errors
    // ========================================
    #[error("caller is not an owner")]
    Unauthorized,

    #[error("owners cannot remove themselves")]
    SelfRemovalForbidden,

    #[error("principal is already an owner")]
    AlreadyOwner,

    #[error("principal is not an owner")]
    OwnerNotFound,

    // ========================================
    // Input validation errors
    // ========================================
    #[error("token name cannot be empty")]
    NameEmpty,

    #[error("token name too long")]
    NameTooLong,

    #[error("token symbol cannot be empty")]
    SymbolEmpty,

    #[error("token symbol too long")]
    SymbolTooLong,

    #[error("invalid character in token symbol")]
    SymbolInvalidChar,

    #[error("logo exceeds the maximum size")]
    LogoTooLarge,

    #[error("logo is not a base64 image data URI")]
    LogoNotDataUri,

    #[error("logo payload is not valid base64")]
    LogoInvalidBase64,

    // ========================================
    // Registry errors
    // ========================================
    #[error("asset id {0} is already registered")]
    DuplicateAssetId(AssetId),

    #[error("symbol {0:?} is already registered")]
    DuplicateSymbol(String),

    #[error("asset id {0} does not exist in the ledger")]
    AssetNotInLedger(AssetId),

    #[error("token not found")]
    TokenNotFound,

    #[error("freezing period has expired")]
    FreezingPeriodExpired,

    #[error("ledger query failed: {0}")]
    Ledger(anyhow::Error),
}
