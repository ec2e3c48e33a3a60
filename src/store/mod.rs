#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::InMemoryMatchStore;
pub use postgres::PgMatchStore;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::matches::{CardKind, Match, MatchPayload, TeamSlot};

/// Persistence collaborator for match records.
///
/// Every counter mutation is a single atomic statement keyed by id; callers
/// never read-modify-write. Methods that mutate by id return the number of
/// affected rows so the service can distinguish "no such record" from
/// success — zero affected rows is never silent success.
#[async_trait]
pub trait MatchStore: Send + Sync + 'static {
    /// All records in store order. Best-effort: an undecodable row is
    /// skipped, not fatal to the listing.
    async fn list(&self) -> Result<Vec<Match>>;

    /// The record with the given id, or `None` if it does not exist.
    async fn get(&self, id: i64) -> Result<Option<Match>>;

    /// Inserts a new record with all counters at 0 and returns it, including
    /// the store-assigned id.
    async fn insert(&self, payload: &MatchPayload) -> Result<Match>;

    /// Overwrites team1, team2, score1, score2 and date unconditionally.
    async fn replace(&self, id: i64, payload: &MatchPayload) -> Result<u64>;

    async fn delete(&self, id: i64) -> Result<u64>;

    /// Adds `goals` to the selected team's score in one statement.
    async fn add_goals(&self, id: i64, team: TeamSlot, goals: i32) -> Result<u64>;

    /// Increments the selected card counter by exactly 1.
    async fn add_card(&self, id: i64, kind: CardKind) -> Result<u64>;

    /// Sets (does not add to) the extra time field.
    async fn set_extra_time(&self, id: i64, minutes: i32) -> Result<u64>;
}
