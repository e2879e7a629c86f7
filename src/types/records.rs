use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Field map of a single document, as the store hands it out.
pub type Fields = serde_json::Map<String, Value>;

pub fn parse<T: DeserializeOwned>(fields: &Fields) -> Result<T, serde_json::Error> {
    serde_json::from_value(Value::Object(fields.clone()))
}

/// A chat message document. Read once per triggering event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    pub sender_email: Option<String>,
    pub sender_name: Option<String>,
    pub text: Option<String>,
}

/// A project document; `members` holds member email addresses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: Option<String>,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserRecord {
    pub email: String,
    pub fcm_token: Option<String>,
}

/// A per-user notification record; every field is optional and defaulted
/// at payload-construction time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationRecord {
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub project_id: Option<String>,
}
