pub mod chat;
pub mod general;

pub use chat::ChatNotificationDispatcher;
pub use general::GeneralNotificationDispatcher;

use serde::Serialize;

/// Client-side routing value carried in every notification's data map.
pub const CLICK_ACTION: &str = "FLUTTER_NOTIFICATION_CLICK";

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Empty strings count as missing when choosing defaults.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// What a single handler invocation did. Every skip is deliberate, not an
/// error; `DeliveryFailed` is an absorbed delivery-service failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Sent {
        success_count: u32,
        failure_count: u32,
    },
    SkippedMissingProject,
    SkippedNoRecipients,
    SkippedNoTokens,
    SkippedMissingUser,
    SkippedNoToken,
    DeliveryFailed {
        reason: String,
    },
}

/// Failures that do escape a handler: the document store misbehaving, or a
/// document whose fields do not parse. Delivery failures never end up here.
#[derive(Debug)]
pub enum DispatchError<E> {
    Store(E),
    Record(serde_json::Error),
}

impl<E: std::fmt::Display> std::fmt::Display for DispatchError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::Store(err) => write!(f, "document store error: {err}"),
            DispatchError::Record(err) => write!(f, "malformed document fields: {err}"),
        }
    }
}

impl<E> From<serde_json::Error> for DispatchError<E> {
    fn from(err: serde_json::Error) -> Self {
        DispatchError::Record(err)
    }
}
