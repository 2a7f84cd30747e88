//! Reaction ledger - per-target reaction counts and per-user held reactions
//!
//! Every reactable target (post, comment, reply) carries one `ReactionState`.
//! A user holds at most one reaction kind per target at a time; re-selecting
//! the held kind removes it, selecting a different kind switches to it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reaction state for a single target
///
/// Invariants:
/// - every count in `reactions` is > 0 (kinds at zero are removed)
/// - `reactions` is exactly the multiset count of `reacted_by` values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionState {
    /// Reaction kind -> number of users currently holding it
    #[serde(default)]
    pub reactions: BTreeMap<String, i64>,
    /// User id -> the single kind that user currently holds
    #[serde(default)]
    pub reacted_by: BTreeMap<Uuid, String>,
}

impl ReactionState {
    /// Create an empty reaction state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a reaction from `user_id` with the given kind
    ///
    /// Transition table:
    /// - user holds `kind` already: remove it (toggle off)
    /// - user holds a different kind: release the old kind, take `kind` (switch)
    /// - user holds nothing: take `kind`
    ///
    /// Total over any state; kind validity is enforced at the service boundary.
    pub fn toggle(&mut self, kind: &str, user_id: Uuid) {
        let prev = self.reacted_by.get(&user_id).cloned();
        match prev.as_deref() {
            Some(prev) if prev == kind => {
                self.release(kind);
                self.reacted_by.remove(&user_id);
            }
            prev => {
                if let Some(prev) = prev {
                    self.release(prev);
                }
                *self.reactions.entry(kind.to_string()).or_insert(0) += 1;
                self.reacted_by.insert(user_id, kind.to_string());
            }
        }
    }

    /// Decrement a kind's count, removing the entry at zero
    fn release(&mut self, kind: &str) {
        if let Some(count) = self.reactions.get_mut(kind) {
            *count -= 1;
            if *count <= 0 {
                self.reactions.remove(kind);
            }
        }
    }

    /// Count of users currently holding `kind`
    pub fn count(&self, kind: &str) -> i64 {
        self.reactions.get(kind).copied().unwrap_or(0)
    }

    /// The kind `user_id` currently holds, if any
    pub fn held_by(&self, user_id: Uuid) -> Option<&str> {
        self.reacted_by.get(&user_id).map(String::as_str)
    }

    /// Check if no reactions are held
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reacted_by.is_empty()
    }

    /// Verify that `reactions` matches the multiset count of `reacted_by`
    /// and that no count is zero or negative
    pub fn is_consistent(&self) -> bool {
        let mut derived: BTreeMap<&str, i64> = BTreeMap::new();
        for kind in self.reacted_by.values() {
            *derived.entry(kind.as_str()).or_insert(0) += 1;
        }
        self.reactions.values().all(|&c| c > 0)
            && self.reactions.len() == derived.len()
            && self
                .reactions
                .iter()
                .all(|(kind, &count)| derived.get(kind.as_str()) == Some(&count))
    }
}

/// Capability shared by every entity that carries reaction state
///
/// The ledger logic lives once on [`ReactionState`]; implementors only
/// expose their state.
pub trait Reactable {
    /// Borrow the reaction state
    fn reaction_state(&self) -> &ReactionState;

    /// Mutably borrow the reaction state
    fn reaction_state_mut(&mut self) -> &mut ReactionState;

    /// Apply a toggle/switch reaction from `user_id`
    fn react(&mut self, kind: &str, user_id: Uuid) {
        self.reaction_state_mut().toggle(kind, user_id);
    }
}
