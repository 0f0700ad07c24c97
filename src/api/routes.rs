use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    players::{count_players, create_player, delete_player, get_player, list_players, update_player},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route("/players/count", get(count_players))
        .route(
            "/players/:id",
            get(get_player)
                .post(update_player)
                .put(update_player)
                .delete(delete_player),
        )
        .with_state(state)
}
