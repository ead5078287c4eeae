use serde::{Deserialize, Serialize};

use super::{Placeholder, PlotResponse};
use crate::utils::deserialize_truthy;

/// Body of the visualizations endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VisualizationResponse {
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub total_plot: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub engagement_rate_plot: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub composite_score_plot: Option<String>,
}

impl PlotResponse for VisualizationResponse {
    const PLACEHOLDERS: &'static [Placeholder] = &[
        Placeholder::Total,
        Placeholder::EngagementRate,
        Placeholder::CompositeScore,
    ];
    const ERROR_CONTEXT: &'static str = "Error in visualization response";
    const NO_DATA: &'static str = "No data available";

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn plot(&self, placeholder: Placeholder) -> Option<&str> {
        match placeholder {
            Placeholder::Total => self.total_plot.as_deref(),
            Placeholder::EngagementRate => self.engagement_rate_plot.as_deref(),
            Placeholder::CompositeScore => self.composite_score_plot.as_deref(),
            Placeholder::Sentiment => None,
        }
    }
}
