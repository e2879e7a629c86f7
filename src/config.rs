#[derive(Clone)]
pub struct AppConfig {
    pub gcp_project: String,
    pub fcm_server_key: String,
    pub firestore_token: Option<String>,
    pub firestore_host: Option<String>,
    pub fcm_endpoint: Option<String>,
}

#[cfg(test)]
impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gcp_project: "demo-project".to_string(),
            fcm_server_key: "test-key".to_string(),
            firestore_token: None,
            firestore_host: None,
            fcm_endpoint: None,
        }
    }
}
