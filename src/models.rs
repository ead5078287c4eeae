pub mod image_payload;
pub mod placeholder;
pub mod sentiment_response;
pub mod visualization_response;

pub use image_payload::ImagePayload;
pub use placeholder::Placeholder;
pub use sentiment_response::SentimentResponse;
pub use visualization_response::VisualizationResponse;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::utils::is_truthy;

/// A parsed endpoint body that may carry plots for some placeholders.
pub trait PlotResponse: DeserializeOwned + Default {
    /// Placeholders this response feeds, in update order.
    const PLACEHOLDERS: &'static [Placeholder];
    /// Prefix of the diagnostic logged for a soft error.
    const ERROR_CONTEXT: &'static str;
    /// Logged in place of the error text when the body has none.
    const NO_DATA: &'static str;

    fn error(&self) -> Option<&str>;

    fn plot(&self, placeholder: Placeholder) -> Option<&str>;

    fn payload(&self, placeholder: Placeholder) -> Option<ImagePayload> {
        self.plot(placeholder).map(ImagePayload::new)
    }

    /// Builds the response from a raw body.
    ///
    /// A `null` body has no `error` to read and fails the run. `Ok(None)` means
    /// any other falsy body. A truthy body that is not an object has no fields
    /// and yields the default response.
    fn from_body(body: Value) -> anyhow::Result<Option<Self>> {
        if body.is_null() {
            return Err(anyhow::anyhow!("Cannot read properties of null (reading 'error')"));
        }
        if !is_truthy(&body) {
            return Ok(None);
        }
        if !body.is_object() {
            return Ok(Some(Self::default()));
        }
        serde_json::from_value(body)
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Malformed response body: {}", e))
    }

    /// Accepts a body whose plots can be applied, or returns the soft-error
    /// diagnostic for a falsy body or one with a truthy `error`.
    fn accept(this: Option<Self>) -> Result<Self, String> {
        let Some(response) = this else {
            return Err(format!("{}: {}", Self::ERROR_CONTEXT, Self::NO_DATA));
        };
        if let Some(error) = response.error() {
            return Err(format!("{}: {}", Self::ERROR_CONTEXT, error));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_and_null_plots_are_absent() {
        let body = json!({
            "total_plot": "QUFB",
            "engagement_rate_plot": "",
            "composite_score_plot": null
        });
        let response = VisualizationResponse::from_body(body).unwrap().unwrap();
        assert_eq!(response.total_plot.as_deref(), Some("QUFB"));
        assert_eq!(response.engagement_rate_plot, None);
        assert_eq!(response.composite_score_plot, None);
        assert!(VisualizationResponse::accept(Some(response)).is_ok());
    }

    #[test]
    fn null_body_is_a_failure() {
        let err = VisualizationResponse::from_body(Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "Cannot read properties of null (reading 'error')");
    }

    #[test]
    fn falsy_body_is_no_data() {
        for body in [json!(false), json!(0), json!("")] {
            let parsed = SentimentResponse::from_body(body).unwrap();
            assert_eq!(parsed, None);
            assert_eq!(
                SentimentResponse::accept(parsed).unwrap_err(),
                "Error in sentiment analysis response: No sentiment data available"
            );
        }
    }

    #[test]
    fn non_object_body_has_no_fields() {
        let parsed = VisualizationResponse::from_body(json!([1, 2])).unwrap();
        assert_eq!(parsed, Some(VisualizationResponse::default()));
    }

    #[test]
    fn error_field_is_reported() {
        let parsed = SentimentResponse::from_body(json!({"error": "no data", "senti_plot": "QUFB"}))
            .unwrap();
        let message = SentimentResponse::accept(parsed).unwrap_err();
        assert_eq!(message, "Error in sentiment analysis response: no data");
    }

    #[test]
    fn falsy_error_field_is_ignored() {
        let parsed = SentimentResponse::from_body(json!({"error": "", "senti_plot": "QUFB"}))
            .unwrap()
            .unwrap();
        let accepted = SentimentResponse::accept(Some(parsed)).unwrap();
        assert_eq!(
            accepted.payload(Placeholder::Sentiment),
            Some(ImagePayload::new("QUFB"))
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let parsed = SentimentResponse::from_body(json!({"error in fetching comments sentiment": "boom"}))
            .unwrap()
            .unwrap();
        assert_eq!(parsed, SentimentResponse::default());
        assert!(SentimentResponse::accept(Some(parsed)).is_ok());
    }
}
