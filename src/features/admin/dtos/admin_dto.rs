use serde::Deserialize;

/// Moderation form posted from the admin listing. Both fields are optional
/// text so that malformed posts fall through to a harmless redirect instead
/// of a client error.
#[derive(Debug, Deserialize)]
pub struct AdminActionForm {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub provider_id: Option<String>,
}

impl AdminActionForm {
    pub fn provider_id(&self) -> Option<i64> {
        self.provider_id.as_deref().and_then(|id| id.trim().parse().ok())
    }
}
