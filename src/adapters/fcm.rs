use crate::config::AppConfig;
use crate::ports::push::PushSender;
use crate::types::payload::{MulticastMessage, MulticastOutcome, PushMessage, PushNotification};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::pin::Pin;

const DEFAULT_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

/// Push delivery over the FCM HTTP API. Multicast goes out as one request
/// carrying `registration_ids`; single sends use `to`.
#[derive(Clone)]
pub struct FcmHttpSender {
    client: reqwest::Client,
    endpoint: String,
    server_key: String,
}

impl FcmHttpSender {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config
                .fcm_endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            server_key: config.fcm_server_key.clone(),
        }
    }

    async fn post(&self, request: &FcmRequest<'_>) -> Result<FcmResponse, FcmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("key={}", self.server_key),
            )
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[derive(Debug, Serialize)]
struct FcmRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    registration_ids: Option<&'a [String]>,
    notification: &'a PushNotification,
    data: &'a HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct FcmResponse {
    #[serde(default)]
    success: u32,
    #[serde(default)]
    failure: u32,
}

#[derive(Debug)]
pub enum FcmError {
    Http(reqwest::Error),
    Rejected,
}

impl std::fmt::Display for FcmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FcmError::Http(err) => write!(f, "fcm request failed: {err}"),
            FcmError::Rejected => f.write_str("fcm rejected the message"),
        }
    }
}

impl From<reqwest::Error> for FcmError {
    fn from(err: reqwest::Error) -> Self {
        FcmError::Http(err)
    }
}

impl PushSender for FcmHttpSender {
    type Error = FcmError;
    type MulticastFut<'a>
        = Pin<Box<dyn Future<Output = Result<MulticastOutcome, Self::Error>> + Send + 'a>>
    where
        Self: 'a;
    type SendFut<'a>
        = Pin<Box<dyn Future<Output = Result<(), Self::Error>> + Send + 'a>>
    where
        Self: 'a;

    fn send_multicast<'a>(&'a self, message: &'a MulticastMessage) -> Self::MulticastFut<'a> {
        Box::pin(async move {
            let request = FcmRequest {
                to: None,
                registration_ids: Some(&message.tokens),
                notification: &message.notification,
                data: &message.data,
            };
            let response = self.post(&request).await?;
            Ok(MulticastOutcome {
                success_count: response.success,
                failure_count: response.failure,
            })
        })
    }

    fn send<'a>(&'a self, message: &'a PushMessage) -> Self::SendFut<'a> {
        Box::pin(async move {
            let request = FcmRequest {
                to: Some(&message.token),
                registration_ids: None,
                notification: &message.notification,
                data: &message.data,
            };
            let response = self.post(&request).await?;
            if response.success == 0 {
                return Err(FcmError::Rejected);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notification() -> PushNotification {
        PushNotification {
            title: "Alice in Apollo".to_string(),
            body: "lunch?".to_string(),
        }
    }

    #[test]
    fn fcm_request__should_serialize_multicast_shape() {
        // Given
        let tokens = vec!["T1".to_string(), "T2".to_string()];
        let data = HashMap::from([("type".to_string(), "chat".to_string())]);
        let notification = notification();
        let request = FcmRequest {
            to: None,
            registration_ids: Some(&tokens),
            notification: &notification,
            data: &data,
        };

        // When
        let body = serde_json::to_value(&request).expect("serialize request");

        // Then
        assert_eq!(body["registration_ids"], json!(["T1", "T2"]));
        assert_eq!(body["notification"]["title"], "Alice in Apollo");
        assert_eq!(body["data"]["type"], "chat");
        assert!(body.get("to").is_none());
    }

    #[test]
    fn fcm_request__should_serialize_single_send_shape() {
        // Given
        let data = HashMap::new();
        let notification = notification();
        let request = FcmRequest {
            to: Some("T9"),
            registration_ids: None,
            notification: &notification,
            data: &data,
        };

        // When
        let body = serde_json::to_value(&request).expect("serialize request");

        // Then
        assert_eq!(body["to"], "T9");
        assert!(body.get("registration_ids").is_none());
    }

    #[test]
    fn fcm_response__should_parse_aggregate_counts() {
        // Given
        let body = json!({
            "multicast_id": 123,
            "success": 2,
            "failure": 1,
            "canonical_ids": 0,
            "results": [{}, {}, {"error": "NotRegistered"}],
        });

        // When
        let response: FcmResponse = serde_json::from_value(body).expect("parse response");

        // Then
        assert_eq!(response.success, 2);
        assert_eq!(response.failure, 1);
    }
}
