use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A football match record as stored and served over the wire.
///
/// The id is sequence-assigned by the store and exposed as text. Counters
/// (scores, cards) only ever grow; extra time is set, not accumulated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub team1: String,
    pub team2: String,
    pub score1: i32,
    pub score2: i32,
    pub date: String,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub extra_time: i32,
}

/// Client-supplied match fields for POST and PUT bodies.
///
/// team1/team2/date are required; scores default to 0 when omitted. PUT is a
/// full overwrite, so an omitted score really does write 0.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchPayload {
    pub team1: String,
    pub team2: String,
    pub date: String,
    #[serde(default)]
    pub score1: i32,
    #[serde(default)]
    pub score2: i32,
}

/// Body of PATCH /api/matches/:id/goals.
///
/// `team` stays a plain string here so unknown tokens reach the service and
/// fail validation with a 400 instead of a body-rejection error.
#[derive(Debug, Deserialize)]
pub struct GoalsUpdate {
    pub team: String,
    pub goals: i32,
}

/// Body of PATCH /api/matches/:id/extratime.
#[derive(Debug, Deserialize)]
pub struct ExtraTimeUpdate {
    pub minutes: i32,
}

/// Which team's score a goals update targets. The store maps each variant to
/// a fixed column; caller text never reaches a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSlot {
    Team1,
    Team2,
}

impl TeamSlot {
    /// Parses the two recognized wire tokens. Anything else is rejected.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "team1" => Some(TeamSlot::Team1),
            "team2" => Some(TeamSlot::Team2),
            _ => None,
        }
    }
}

/// Card counter targeted by a card-registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Yellow,
    Red,
}
