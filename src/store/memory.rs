use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::matches::{CardKind, Match, MatchPayload, TeamSlot};
use crate::store::MatchStore;

/// HashMap-backed store. Increments happen under the lock, so concurrent
/// patches on the same record cannot lose updates, same as the single-statement
/// guarantee of the SQL store. Used by the test suite.
#[derive(Default)]
pub struct InMemoryMatchStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    records: HashMap<i64, Match>,
    next_id: i64,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("match store mutex poisoned")
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn list(&self) -> Result<Vec<Match>> {
        let inner = self.lock();
        let mut all: Vec<Match> = inner.records.values().cloned().collect();
        all.sort_by_key(|m| m.id.parse::<i64>().unwrap_or(i64::MAX));
        Ok(all)
    }

    async fn get(&self, id: i64) -> Result<Option<Match>> {
        Ok(self.lock().records.get(&id).cloned())
    }

    async fn insert(&self, payload: &MatchPayload) -> Result<Match> {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        let record = Match {
            id: id.to_string(),
            team1: payload.team1.clone(),
            team2: payload.team2.clone(),
            score1: 0,
            score2: 0,
            date: payload.date.clone(),
            yellow_cards: 0,
            red_cards: 0,
            extra_time: 0,
        };
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn replace(&self, id: i64, payload: &MatchPayload) -> Result<u64> {
        let mut inner = self.lock();
        match inner.records.get_mut(&id) {
            Some(record) => {
                record.team1 = payload.team1.clone();
                record.team2 = payload.team2.clone();
                record.score1 = payload.score1;
                record.score2 = payload.score2;
                record.date = payload.date.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        Ok(self.lock().records.remove(&id).map_or(0, |_| 1))
    }

    async fn add_goals(&self, id: i64, team: TeamSlot, goals: i32) -> Result<u64> {
        let mut inner = self.lock();
        match inner.records.get_mut(&id) {
            Some(record) => {
                match team {
                    TeamSlot::Team1 => record.score1 += goals,
                    TeamSlot::Team2 => record.score2 += goals,
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn add_card(&self, id: i64, kind: CardKind) -> Result<u64> {
        let mut inner = self.lock();
        match inner.records.get_mut(&id) {
            Some(record) => {
                match kind {
                    CardKind::Yellow => record.yellow_cards += 1,
                    CardKind::Red => record.red_cards += 1,
                }
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn set_extra_time(&self, id: i64, minutes: i32) -> Result<u64> {
        let mut inner = self.lock();
        match inner.records.get_mut(&id) {
            Some(record) => {
                record.extra_time = minutes;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
