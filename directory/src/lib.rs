//! Token Directory
//!
//! An authoritative registry of fungible-token metadata (asset id, symbol,
//! display name, logo) with three load-bearing guarantees:
//!
//! - mutation is restricted to an authorized owner set;
//! - corrections to the identifying fields (asset id, symbol) are only
//!   permitted inside a bounded freezing window after creation;
//! - a token is admitted only after its asset id is confirmed by an
//!   external ledger of record, with uniqueness enforced on both the asset
//!   id and the symbol independently.
//!
//! The registry is a plain owned aggregate: construct a [`TokenRegistry`]
//! with the initial owner, a [`LedgerValidator`] handle, and a [`Clock`],
//! and pass it by reference into every call. Presentation, transport, and
//! identity concerns live with the host.

pub mod config;
pub mod error;
pub mod ledger;
pub mod owners;
pub mod principal;
pub mod registry;
pub mod time;
pub mod token;

pub use config::{DirectoryConfig, DEFAULT_FREEZING_PERIOD};
pub use error::{DirectoryError, DirectoryResult};
pub use ledger::LedgerValidator;
pub use owners::OwnerSet;
pub use principal::{Principal, PrincipalError};
pub use registry::TokenRegistry;
pub use time::{Clock, SystemClock, TimestampNanos};
pub use token::{AssetId, CreatePayload, FungibleToken, UpdatePayload};
