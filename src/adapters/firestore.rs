use crate::config::AppConfig;
use crate::ports::store::DocumentStore;
use crate::types::records::Fields;

use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::pin::Pin;

const DEFAULT_HOST: &str = "https://firestore.googleapis.com";

/// Document store backed by the Firestore REST API: point reads via document
/// GET, equality queries via `:runQuery` with a limit of 1. Wire values are
/// unwrapped into plain JSON before they leave this module.
#[derive(Clone)]
pub struct FirestoreRestStore {
    client: reqwest::Client,
    documents_url: String,
    token: Option<String>,
}

impl FirestoreRestStore {
    pub fn new(config: &AppConfig) -> Self {
        let host = config.firestore_host.as_deref().unwrap_or(DEFAULT_HOST);
        Self {
            client: reqwest::Client::new(),
            documents_url: format!(
                "{host}/v1/projects/{}/databases/(default)/documents",
                config.gcp_project
            ),
            token: config.firestore_token.clone(),
        }
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let request = self.client.request(method, url);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct QueryRow {
    document: Option<FirestoreDocument>,
}

// Query responses interleave result rows with rows carrying only a read
// time; the first row holding a document wins.
fn first_document(rows: Vec<QueryRow>) -> Option<Fields> {
    rows.into_iter()
        .find_map(|row| row.document)
        .map(|document| decode_fields(document.fields))
}

fn decode_fields(fields: Map<String, Value>) -> Fields {
    fields
        .into_iter()
        .map(|(name, value)| (name, decode_value(value)))
        .collect()
}

/// Unwraps one Firestore typed value (`{"stringValue": "x"}` and friends)
/// into the plain JSON value it carries.
fn decode_value(value: Value) -> Value {
    let Value::Object(mut wrapper) = value else {
        return Value::Null;
    };
    for key in ["stringValue", "booleanValue", "doubleValue", "timestampValue", "referenceValue"] {
        if let Some(inner) = wrapper.remove(key) {
            return inner;
        }
    }
    if let Some(inner) = wrapper.remove("integerValue") {
        // 64-bit integers travel as decimal strings.
        if let Value::String(digits) = &inner {
            if let Ok(number) = digits.parse::<i64>() {
                return Value::from(number);
            }
        }
        return inner;
    }
    if wrapper.remove("nullValue").is_some() {
        return Value::Null;
    }
    if let Some(Value::Object(mut array)) = wrapper.remove("arrayValue") {
        let values = match array.remove("values") {
            Some(Value::Array(values)) => values,
            _ => Vec::new(),
        };
        return Value::Array(values.into_iter().map(decode_value).collect());
    }
    if let Some(Value::Object(mut map)) = wrapper.remove("mapValue") {
        let fields = match map.remove("fields") {
            Some(Value::Object(fields)) => fields,
            _ => Map::new(),
        };
        return Value::Object(decode_fields(fields));
    }
    Value::Null
}

impl DocumentStore for FirestoreRestStore {
    type Error = reqwest::Error;
    type GetFut<'a>
        = Pin<Box<dyn Future<Output = Result<Option<Fields>, Self::Error>> + Send + 'a>>
    where
        Self: 'a;
    type FindFut<'a>
        = Pin<Box<dyn Future<Output = Result<Option<Fields>, Self::Error>> + Send + 'a>>
    where
        Self: 'a;

    fn get_document<'a>(&'a self, collection: &'a str, doc_id: &'a str) -> Self::GetFut<'a> {
        Box::pin(async move {
            let url = format!("{}/{collection}/{doc_id}", self.documents_url);
            let response = self.request(reqwest::Method::GET, url).send().await?;
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            let document: FirestoreDocument = response.error_for_status()?.json().await?;
            Ok(Some(decode_fields(document.fields)))
        })
    }

    fn find_by_field<'a>(
        &'a self,
        collection: &'a str,
        field: &'a str,
        value: &'a str,
    ) -> Self::FindFut<'a> {
        Box::pin(async move {
            let url = format!("{}:runQuery", self.documents_url);
            let body = json!({
                "structuredQuery": {
                    "from": [{"collectionId": collection}],
                    "where": {
                        "fieldFilter": {
                            "field": {"fieldPath": field},
                            "op": "EQUAL",
                            "value": {"stringValue": value},
                        }
                    },
                    "limit": 1,
                }
            });
            let response = self
                .request(reqwest::Method::POST, url)
                .json(&body)
                .send()
                .await?
                .error_for_status()?;
            let rows: Vec<QueryRow> = response.json().await?;
            Ok(first_document(rows))
        })
    }
}
