use serde::Serialize;
use serde_json::Value as JsonValue;

pub const DEFAULT_TITLE: &str = "Dial.to Blink";
pub const DEFAULT_DESCRIPTION: &str = "Open this link with a Solana wallet";
pub const DEFAULT_IMAGE: &str = "https://dial.to/dial-icon.png";
pub const DEFAULT_SITE_NAME: &str = "Dial.to";

/// Link-preview metadata of an action. Every field is always populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionMetadata {
    pub title: String,
    pub description: String,
    pub image: String,
    pub site_name: String,
}

impl Default for ActionMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }
}

impl ActionMetadata {
    /// Map an action payload of either response generation onto the
    /// canonical record. Missing or mistyped fields fall back to defaults.
    ///
    /// Top-level `title`, `description` and `icon` win whenever they are
    /// strings. Every other source must be a non-empty string.
    pub fn extract(payload: &JsonValue) -> Self {
        let mut meta = Self::default();

        if let Some(title) = payload["title"]
            .as_str()
            .or_else(|| non_empty_at(payload, &["preview", "title"]))
            .or_else(|| non_empty_at(payload, &["label"]))
        {
            meta.title = title.to_string();
        }

        if let Some(description) = payload["description"]
            .as_str()
            .or_else(|| non_empty_at(payload, &["preview", "description"]))
        {
            meta.description = description.to_string();
        }

        if let Some(image) = payload["icon"]
            .as_str()
            .or_else(|| non_empty_at(payload, &["preview", "image"]))
            .or_else(|| non_empty_at(payload, &["context", "provider", "icon"]))
        {
            meta.image = image.to_string();
        }

        if let Some(name) = non_empty_at(payload, &["context", "provider", "name"]) {
            meta.site_name = name.to_string();
        }

        meta
    }
}

fn non_empty_at<'a>(payload: &'a JsonValue, path: &[&str]) -> Option<&'a str> {
    path.iter()
        .try_fold(payload, |v, key| v.get(*key))?
        .as_str()
        .filter(|s| !s.is_empty())
}
