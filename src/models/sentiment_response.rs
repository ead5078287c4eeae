use serde::{Deserialize, Serialize};

use super::{Placeholder, PlotResponse};
use crate::utils::deserialize_truthy;

/// Body of the sentiment endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SentimentResponse {
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub senti_plot: Option<String>,
}

impl PlotResponse for SentimentResponse {
    const PLACEHOLDERS: &'static [Placeholder] = &[Placeholder::Sentiment];
    const ERROR_CONTEXT: &'static str = "Error in sentiment analysis response";
    const NO_DATA: &'static str = "No sentiment data available";

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn plot(&self, placeholder: Placeholder) -> Option<&str> {
        match placeholder {
            Placeholder::Sentiment => self.senti_plot.as_deref(),
            _ => None,
        }
    }
}
