//! Owner Set
//!
//! The authorization primitive: the set of principals allowed to mutate
//! registry state. The set is never empty; it starts with exactly one
//! deployer-supplied owner, and self-removal is rejected unconditionally,
//! so no sequence of calls can drain it.

use indexmap::IndexSet;
use log::info;

use crate::error::{DirectoryError, DirectoryResult};
use crate::principal::Principal;

/// Current set of principals authorized to mutate the registry
#[derive(Clone, Debug)]
pub struct OwnerSet {
    members: IndexSet<Principal>,
}

impl OwnerSet {
    /// Create the set with its single initial owner.
    pub fn new(initial_owner: Principal) -> Self {
        let mut members = IndexSet::new();
        members.insert(initial_owner);
        Self { members }
    }

    /// Membership test, the gate for every mutating entry point.
    pub fn is_owner(&self, principal: &Principal) -> bool {
        self.members.contains(principal)
    }

    /// Add `principal` to the set. Caller must already be an owner.
    pub fn add(&mut self, caller: &Principal, principal: Principal) -> DirectoryResult<()> {
        if !self.is_owner(caller) {
            return Err(DirectoryError::Unauthorized);
        }
        if self.members.contains(&principal) {
            return Err(DirectoryError::AlreadyOwner);
        }
        info!("owner {principal} added by {caller}");
        self.members.insert(principal);
        Ok(())
    }

    /// Remove `principal` from the set. Caller must be an owner and may
    /// not remove themselves, whatever the set size.
    pub fn remove(&mut self, caller: &Principal, principal: &Principal) -> DirectoryResult<()> {
        if !self.is_owner(caller) {
            return Err(DirectoryError::Unauthorized);
        }
        if principal == caller {
            return Err(DirectoryError::SelfRemovalForbidden);
        }
        if !self.members.shift_remove(principal) {
            return Err(DirectoryError::OwnerNotFound);
        }
        info!("owner {principal} removed by {caller}");
        Ok(())
    }

    /// Owners in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Principal> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
