use std::sync::Arc;

use crate::errors::{AppError, Result};
use crate::models::matches::{CardKind, GoalsUpdate, Match, MatchPayload, TeamSlot};
use crate::store::MatchStore;

/// The record-update contract layer: validates inputs, applies operations
/// through the injected store, and decides how zero-affected-rows and bad
/// input map to errors. Holds no state of its own.
#[derive(Clone)]
pub struct MatchService {
    store: Arc<dyn MatchStore>,
}

impl MatchService {
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Match>> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Match> {
        let id = parse_id(id).ok_or(AppError::NotFound)?;
        self.store.get(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create(&self, payload: MatchPayload) -> Result<Match> {
        validate_payload(&payload)?;
        self.store.insert(&payload).await
    }

    /// Full overwrite of the mutable fields. Not a merge: whatever the body
    /// carries (including defaulted zeros) is what gets written.
    pub async fn replace(&self, id: &str, payload: MatchPayload) -> Result<Match> {
        // PUT is the one place a malformed id is the client's fault rather
        // than a lookup miss.
        let id = parse_id(id).ok_or_else(|| AppError::Validation("invalid match id".into()))?;
        validate_payload(&payload)?;

        let affected = self.store.replace(id, &payload).await?;
        if affected == 0 {
            return Err(AppError::NotFound);
        }
        self.store.get(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = parse_id(id).ok_or(AppError::NotFound)?;
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Adds goals to one team's score. The increment is a single atomic
    /// statement at the store; the re-read afterwards is presentation only,
    /// success is decided by the affected-rows count.
    pub async fn apply_goals(&self, id: &str, update: GoalsUpdate) -> Result<Match> {
        let team = TeamSlot::from_token(&update.team)
            .ok_or_else(|| AppError::Validation("team must be \"team1\" or \"team2\"".into()))?;
        if update.goals <= 0 {
            return Err(AppError::Validation("goals must be a positive integer".into()));
        }

        let id = parse_id(id).ok_or(AppError::NotFound)?;
        let affected = self.store.add_goals(id, team, update.goals).await?;
        if affected == 0 {
            return Err(AppError::NotFound);
        }
        self.store.get(id).await?.ok_or(AppError::NotFound)
    }

    /// Registers one yellow or red card. Always +1, never more.
    pub async fn apply_card(&self, id: &str, kind: CardKind) -> Result<()> {
        let id = parse_id(id).ok_or(AppError::NotFound)?;
        let affected = self.store.add_card(id, kind).await?;
        if affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Sets the extra time field. Overwrites any previous value.
    pub async fn apply_extra_time(&self, id: &str, minutes: i32) -> Result<()> {
        if !(1..=15).contains(&minutes) {
            return Err(AppError::Validation(
                "extra time must be between 1 and 15 minutes".into(),
            ));
        }

        let id = parse_id(id).ok_or(AppError::NotFound)?;
        let affected = self.store.set_extra_time(id, minutes).await?;
        if affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

/// A non-numeric id cannot match any sequence-assigned record.
fn parse_id(id: &str) -> Option<i64> {
    id.parse().ok()
}

fn validate_payload(payload: &MatchPayload) -> Result<()> {
    if payload.team1.is_empty() || payload.team2.is_empty() || payload.date.is_empty() {
        return Err(AppError::Validation(
            "team1, team2 and date are required".into(),
        ));
    }
    Ok(())
}
