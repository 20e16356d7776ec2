//! Landing page — static prediction form posting to /predict.

use axum::{extract::State, response::Html};

use crate::state::SharedState;

/// GET / — the prediction form. Pure presentation; the form is
/// serialized to JSON client-side and POSTed to /predict.
pub async fn home(State(_state): State<SharedState>) -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}
