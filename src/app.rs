use crate::ports::push::PushSender;
use crate::ports::store::DocumentStore;
use crate::state::AppState;
use crate::triggers::{TriggerOutcome, TriggerRouter};
use crate::types::records::Fields;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use serde::Deserialize;
use std::sync::Arc;

/// One document-creation event as delivered by the trigger subscription:
/// the created document's path and its field values as plain JSON.
#[derive(Debug, Deserialize)]
pub struct DocumentEvent {
    pub path: String,
    #[serde(default)]
    pub fields: Fields,
}

pub fn app<D, P>(triggers: TriggerRouter<D, P>) -> Router
where
    D: DocumentStore,
    P: PushSender,
{
    let state = AppState {
        triggers: Arc::new(triggers),
    };
    Router::new()
        .route("/events", post(document_created::<D, P>))
        .route("/health", get(health))
        .with_state(state)
}

async fn document_created<D, P>(
    State(state): State<AppState<D, P>>,
    Json(event): Json<DocumentEvent>,
) -> Response
where
    D: DocumentStore,
    P: PushSender,
{
    match state.triggers.dispatch_create(&event.path, &event.fields).await {
        Ok(TriggerOutcome::Dispatched(outcome)) => (StatusCode::OK, Json(outcome)).into_response(),
        Ok(TriggerOutcome::Unmatched) => {
            (StatusCode::NOT_FOUND, "no trigger registered for path").into_response()
        }
        Err(err) => {
            eprintln!("event dispatch failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
