use base64::{Engine, engine::general_purpose::STANDARD};

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Base64 text of a PNG plot, exactly as the server sent it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePayload(String);

impl ImagePayload {
    pub fn new(base64: impl Into<String>) -> Self {
        Self(base64.into())
    }

    /// `data:image/png;base64,<payload>`. The payload is not validated.
    pub fn data_uri(&self) -> String {
        format!("{}{}", PNG_DATA_URI_PREFIX, self.0)
    }

    /// Recovers a payload from a PNG data URI produced by [`ImagePayload::data_uri`].
    pub fn from_data_uri(uri: &str) -> Option<Self> {
        uri.strip_prefix(PNG_DATA_URI_PREFIX).map(Self::new)
    }

    pub fn decode(&self) -> anyhow::Result<Vec<u8>> {
        STANDARD
            .decode(self.0.trim())
            .map_err(|e| anyhow::anyhow!("Invalid base64 image payload: {}", e))
    }
}
