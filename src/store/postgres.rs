use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::errors::Result;
use crate::models::matches::{CardKind, Match, MatchPayload, TeamSlot};
use crate::store::MatchStore;

const SELECT_COLUMNS: &str =
    "id::TEXT AS id, team1, team2, score1, score2, date, yellow_cards, red_cards, extra_time";

/// sqlx/Postgres-backed store. Holds a connection pool; safe to clone and
/// share across handlers.
#[derive(Clone)]
pub struct PgMatchStore {
    pool: PgPool,
}

impl PgMatchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchStore for PgMatchStore {
    async fn list(&self) -> Result<Vec<Match>> {
        let rows = sqlx::query(&format!("SELECT {SELECT_COLUMNS} FROM matches ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        // Best-effort listing: a row that fails to decode is logged and
        // skipped instead of failing the whole response.
        let mut matches = Vec::with_capacity(rows.len());
        for row in &rows {
            match Match::from_row(row) {
                Ok(m) => matches.push(m),
                Err(e) => tracing::warn!("skipping undecodable match row: {e}"),
            }
        }
        Ok(matches)
    }

    async fn get(&self, id: i64) -> Result<Option<Match>> {
        let found = sqlx::query_as::<_, Match>(&format!(
            "SELECT {SELECT_COLUMNS} FROM matches WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(found)
    }

    async fn insert(&self, payload: &MatchPayload) -> Result<Match> {
        let created = sqlx::query_as::<_, Match>(&format!(
            "INSERT INTO matches (team1, team2, date) VALUES ($1, $2, $3) RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&payload.team1)
        .bind(&payload.team2)
        .bind(&payload.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn replace(&self, id: i64, payload: &MatchPayload) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE matches SET team1 = $1, team2 = $2, score1 = $3, score2 = $4, date = $5 \
             WHERE id = $6",
        )
        .bind(&payload.team1)
        .bind(&payload.team2)
        .bind(payload.score1)
        .bind(payload.score2)
        .bind(&payload.date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn add_goals(&self, id: i64, team: TeamSlot, goals: i32) -> Result<u64> {
        // Fixed statement per team slot; caller input never reaches SQL text.
        let sql = match team {
            TeamSlot::Team1 => "UPDATE matches SET score1 = score1 + $1 WHERE id = $2",
            TeamSlot::Team2 => "UPDATE matches SET score2 = score2 + $1 WHERE id = $2",
        };
        let result = sqlx::query(sql)
            .bind(goals)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn add_card(&self, id: i64, kind: CardKind) -> Result<u64> {
        let sql = match kind {
            CardKind::Yellow => "UPDATE matches SET yellow_cards = yellow_cards + 1 WHERE id = $1",
            CardKind::Red => "UPDATE matches SET red_cards = red_cards + 1 WHERE id = $1",
        };
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn set_extra_time(&self, id: i64, minutes: i32) -> Result<u64> {
        let result = sqlx::query("UPDATE matches SET extra_time = $1 WHERE id = $2")
            .bind(minutes)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
