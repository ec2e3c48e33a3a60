use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers::matches::{
    create_match, delete_match, get_match, list_matches, register_red_card,
    register_yellow_card, update_extra_time, update_goals, update_match,
};
use crate::service::MatchService;

pub fn routes() -> Router<MatchService> {
    Router::new()
        .route("/", get(list_matches).post(create_match))
        .route(
            "/:id",
            get(get_match).put(update_match).delete(delete_match),
        )
        .route("/:id/goals", patch(update_goals))
        .route("/:id/yellowcards", patch(register_yellow_card))
        .route("/:id/redcards", patch(register_red_card))
        .route("/:id/extratime", patch(update_extra_time))
}
