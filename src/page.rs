//! The page the loader writes into.

pub mod document;

pub use document::Document;

/// Class list given to the error banner.
pub const ALERT_CLASS: &str = "alert alert-danger mt-3";

/// Prefix of the banner text shown when loading fails.
pub const ALERT_PREFIX: &str = "An error occurred while loading visualizations: ";

/// A visible error banner appended to the page container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub class_name: String,
    pub role: String,
    pub text: String,
}

impl Alert {
    pub fn load_failure(message: &str) -> Self {
        Self {
            class_name: ALERT_CLASS.to_string(),
            role: "alert".to_string(),
            text: format!("{}{}", ALERT_PREFIX, message),
        }
    }
}

/// Element access the loader needs from the hosting page.
///
/// Lookups are by element id, except the banner container which is the first
/// element carrying `container_class`.
pub trait Page {
    fn contains(&self, element_id: &str) -> bool;

    fn set_image_source(&mut self, element_id: &str, src: &str) -> anyhow::Result<()>;

    fn set_opacity(&mut self, element_id: &str, opacity: f32) -> anyhow::Result<()>;

    /// Fails when no element has `container_class`.
    fn append_alert(&mut self, container_class: &str, alert: Alert) -> anyhow::Result<()>;
}
