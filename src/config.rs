use serde::Deserialize;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";
pub const VISUALIZATIONS_PATH: &str = "/fetch_visualizations";
pub const SENTIMENT_PATH: &str = "/sentiment_analysis";
pub const CONTAINER_CLASS: &str = "container";

/// Where the loader fetches from and where it reports failures.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LoaderConfig {
    /// Origin the endpoint paths are resolved against.
    pub base_url: Url,
    pub visualizations_path: String,
    pub sentiment_path: String,
    /// Class of the element that receives the error banner.
    pub container_class: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            visualizations_path: VISUALIZATIONS_PATH.to_string(),
            sentiment_path: SENTIMENT_PATH.to_string(),
            container_class: CONTAINER_CLASS.to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid base url '{}': {}", base_url, e))?;
        Ok(Self::default().with_base_url(base_url))
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_visualizations_path(mut self, path: impl Into<String>) -> Self {
        self.visualizations_path = path.into();
        self
    }

    pub fn with_sentiment_path(mut self, path: impl Into<String>) -> Self {
        self.sentiment_path = path.into();
        self
    }

    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = class.into();
        self
    }

    /// Resolves an endpoint path against `base_url`.
    pub fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| anyhow::anyhow!("Invalid endpoint '{}': {}", path, e))
    }
}
