use serde::Serialize;
use std::collections::HashMap;

/// The visible part of a push notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushNotification {
    pub title: String,
    pub body: String,
}

/// A push aimed at a single device token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushMessage {
    pub notification: PushNotification,
    pub data: HashMap<String, String>,
    pub token: String,
}

/// A push aimed at several device tokens in one delivery call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MulticastMessage {
    pub notification: PushNotification,
    pub data: HashMap<String, String>,
    pub tokens: Vec<String>,
}

/// Aggregate per-token counts reported by a multicast delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MulticastOutcome {
    pub success_count: u32,
    pub failure_count: u32,
}
