//! Token Registry
//!
//! Owns the token table, both uniqueness indexes, and the owner set, and
//! orchestrates authorization, format validation, ledger confirmation, and
//! the freezing policy around every mutation.
//!
//! Every mutating call runs the same gauntlet, in an order chosen for
//! observable error selection: authorization, then field formats, then
//! uniqueness and ledger checks, then the freezing window (corrections
//! only), and only then the mutation itself. Read operations skip all of
//! it.
//!
//! The registry assumes single-writer call processing: each operation runs
//! to completion before the next begins. The ledger query in [`add_token`]
//! is the sole suspension point and happens strictly before any local
//! mutation, so a failed or cancelled query leaves no residue. A
//! multi-threaded host must serialize mutating calls behind one exclusive
//! section per registry instance.
//!
//! [`add_token`]: TokenRegistry::add_token

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, info};

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};
use crate::ledger::LedgerValidator;
use crate::owners::OwnerSet;
use crate::principal::Principal;
use crate::time::{Clock, TimestampNanos};
use crate::token::{
    validate_logo, validate_name, validate_symbol, AssetId, CreatePayload, FungibleToken,
    UpdatePayload,
};

/// Authoritative registry of fungible-token metadata
pub struct TokenRegistry {
    config: DirectoryConfig,
    owners: OwnerSet,
    ledger: Arc<dyn LedgerValidator>,
    clock: Arc<dyn Clock>,
    /// Tokens keyed by asset id, in insertion order
    tokens: IndexMap<AssetId, FungibleToken>,
    /// Secondary unique index: symbol (exact, case-sensitive) to asset id
    symbols: HashMap<String, AssetId>,
}

impl TokenRegistry {
    /// Create a registry with its single initial owner and collaborators.
    pub fn new(
        config: DirectoryConfig,
        initial_owner: Principal,
        ledger: Arc<dyn LedgerValidator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            owners: OwnerSet::new(initial_owner),
            ledger,
            clock,
            tokens: IndexMap::new(),
            symbols: HashMap::new(),
        }
    }

    fn require_owner(&self, caller: &Principal) -> DirectoryResult<()> {
        if self.owners.is_owner(caller) {
            Ok(())
        } else {
            debug!("rejected call from non-owner {caller}");
            Err(DirectoryError::Unauthorized)
        }
    }

    // ========================================
    // Token registration
    // ========================================

    /// Register a new token.
    ///
    /// The asset id must be confirmed by the ledger of record before the
    /// registry mutates anything; a negative or failed lookup aborts with
    /// no state change.
    pub async fn add_token(
        &mut self,
        caller: &Principal,
        payload: CreatePayload,
    ) -> DirectoryResult<FungibleToken> {
        self.require_owner(caller)?;
        payload.validate()?;

        if self.tokens.contains_key(&payload.asset_id) {
            return Err(DirectoryError::DuplicateAssetId(payload.asset_id));
        }
        if self.symbols.contains_key(&payload.symbol) {
            return Err(DirectoryError::DuplicateSymbol(payload.symbol));
        }

        let confirmed = self
            .ledger
            .asset_exists(payload.asset_id)
            .await
            .map_err(DirectoryError::Ledger)?;
        if !confirmed {
            return Err(DirectoryError::AssetNotInLedger(payload.asset_id));
        }

        let now = self.clock.now_nanos();
        let token = FungibleToken {
            asset_id: payload.asset_id,
            symbol: payload.symbol,
            name: payload.name,
            logo: payload.logo,
            created_at: now,
            modified_at: now,
        };
        self.symbols.insert(token.symbol.clone(), token.asset_id);
        self.tokens.insert(token.asset_id, token.clone());

        info!("token {} registered with asset id {}", token.symbol, token.asset_id);
        Ok(token)
    }

    // ========================================
    // Reads (no authorization)
    // ========================================

    /// Look a token up by its asset id.
    pub fn token_by_asset_id(&self, asset_id: AssetId) -> Option<&FungibleToken> {
        self.tokens.get(&asset_id)
    }

    /// Look a token up by symbol, case-sensitive exact match.
    pub fn token_by_symbol(&self, symbol: &str) -> Option<&FungibleToken> {
        self.symbols
            .get(symbol)
            .and_then(|asset_id| self.tokens.get(asset_id))
    }

    /// All registered tokens, in insertion order.
    pub fn all_tokens(&self) -> impl Iterator<Item = &FungibleToken> {
        self.tokens.values()
    }

    /// The configured correction window, in nanoseconds.
    pub fn freezing_period(&self) -> TimestampNanos {
        self.config.freezing_period
    }

    // ========================================
    // Identifying-field corrections (freezing-gated)
    // ========================================

    /// Rewrite the asset id of the token currently carrying `symbol`.
    ///
    /// Only permitted while the token's freezing window is open.
    /// Correcting to the current value is not a collision.
    pub fn correct_asset_id(
        &mut self,
        caller: &Principal,
        symbol: &str,
        new_asset_id: AssetId,
    ) -> DirectoryResult<()> {
        self.require_owner(caller)?;

        let asset_id = *self
            .symbols
            .get(symbol)
            .ok_or(DirectoryError::TokenNotFound)?;
        if new_asset_id != asset_id && self.tokens.contains_key(&new_asset_id) {
            return Err(DirectoryError::DuplicateAssetId(new_asset_id));
        }

        let now = self.clock.now_nanos();
        let created_at = self
            .tokens
            .get(&asset_id)
            .ok_or(DirectoryError::TokenNotFound)?
            .created_at;
        if !self.config.is_correctable(now, created_at) {
            return Err(DirectoryError::FreezingPeriodExpired);
        }

        let mut token = self
            .tokens
            .shift_remove(&asset_id)
            .ok_or(DirectoryError::TokenNotFound)?;
        token.asset_id = new_asset_id;
        token.modified_at = now;
        self.symbols.insert(token.symbol.clone(), new_asset_id);
        self.tokens.insert(new_asset_id, token);

        info!("asset id of {symbol} corrected from {asset_id} to {new_asset_id}");
        Ok(())
    }

    /// Rewrite the symbol of the token currently keyed by `asset_id`.
    ///
    /// Symmetric to [`correct_asset_id`]; additionally format-validates the
    /// replacement symbol.
    ///
    /// [`correct_asset_id`]: TokenRegistry::correct_asset_id
    pub fn correct_symbol(
        &mut self,
        caller: &Principal,
        asset_id: AssetId,
        new_symbol: &str,
    ) -> DirectoryResult<()> {
        self.require_owner(caller)?;
        validate_symbol(new_symbol)?;

        let (created_at, old_symbol) = {
            let token = self
                .tokens
                .get(&asset_id)
                .ok_or(DirectoryError::TokenNotFound)?;
            (token.created_at, token.symbol.clone())
        };
        match self.symbols.get(new_symbol) {
            Some(&holder) if holder != asset_id => {
                return Err(DirectoryError::DuplicateSymbol(new_symbol.to_owned()));
            }
            _ => {}
        }

        let now = self.clock.now_nanos();
        if !self.config.is_correctable(now, created_at) {
            return Err(DirectoryError::FreezingPeriodExpired);
        }

        let token = self
            .tokens
            .get_mut(&asset_id)
            .ok_or(DirectoryError::TokenNotFound)?;
        token.symbol = new_symbol.to_owned();
        token.modified_at = now;
        self.symbols.remove(&old_symbol);
        self.symbols.insert(new_symbol.to_owned(), asset_id);

        info!("symbol of asset id {asset_id} corrected from {old_symbol} to {new_symbol}");
        Ok(())
    }

    // ========================================
    // Presentation updates (never freezing-gated)
    // ========================================

    /// Apply a partial update to symbol, name, or logo.
    ///
    /// This path is deliberately exempt from the freezing policy: even a
    /// symbol change (say, fixing capitalization years later) is allowed,
    /// though it is still format-validated and checked against the other
    /// tokens' symbols.
    pub fn update_token(
        &mut self,
        caller: &Principal,
        asset_id: AssetId,
        payload: UpdatePayload,
    ) -> DirectoryResult<FungibleToken> {
        self.require_owner(caller)?;

        if let Some(symbol) = payload.symbol.as_deref() {
            validate_symbol(symbol)?;
        }
        if let Some(name) = payload.name.as_deref() {
            validate_name(name)?;
        }
        if let Some(logo) = payload.logo.as_deref() {
            validate_logo(logo)?;
        }

        if !self.tokens.contains_key(&asset_id) {
            return Err(DirectoryError::TokenNotFound);
        }
        if let Some(symbol) = payload.symbol.as_deref() {
            match self.symbols.get(symbol) {
                Some(&holder) if holder != asset_id => {
                    return Err(DirectoryError::DuplicateSymbol(symbol.to_owned()));
                }
                _ => {}
            }
        }

        let now = self.clock.now_nanos();
        let token = self
            .tokens
            .get_mut(&asset_id)
            .ok_or(DirectoryError::TokenNotFound)?;
        if let Some(symbol) = payload.symbol {
            if symbol != token.symbol {
                self.symbols.remove(&token.symbol);
                self.symbols.insert(symbol.clone(), asset_id);
            }
            token.symbol = symbol;
        }
        if let Some(name) = payload.name {
            token.name = name;
        }
        if let Some(logo) = payload.logo {
            token.logo = logo;
        }
        token.modified_at = now;

        info!("token with asset id {asset_id} updated");
        Ok(token.clone())
    }

    // ========================================
    // Owner management
    // ========================================

    /// Grant `principal` mutation rights.
    pub fn add_owner(&mut self, caller: &Principal, principal: Principal) -> DirectoryResult<()> {
        self.owners.add(caller, principal)
    }

    /// Revoke `principal`'s mutation rights. Self-removal is rejected.
    pub fn remove_owner(
        &mut self,
        caller: &Principal,
        principal: &Principal,
    ) -> DirectoryResult<()> {
        self.owners.remove(caller, principal)
    }

    /// Current owners, in insertion order.
    pub fn owners(&self) -> impl Iterator<Item = &Principal> {
        self.owners.iter()
    }

    /// Whether `principal` may mutate the registry.
    pub fn is_owner(&self, principal: &Principal) -> bool {
        self.owners.is_owner(principal)
    }
}
