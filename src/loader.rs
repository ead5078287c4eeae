//! Fills the page's plot placeholders from the two endpoints.

pub mod blocking;

pub use blocking::BlockingLoader;

use tracing::{debug, info};

use crate::clients::JsonSource;
use crate::config::LoaderConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::models::{Placeholder, PlotResponse, SentimentResponse, VisualizationResponse};
use crate::page::{Alert, Page};

/// Opacity of a placeholder once its image is in place.
pub const REVEALED_OPACITY: f32 = 1.0;

/// What a page-ready run did to the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadOutcome {
    /// Placeholders whose image was set, in update order.
    pub revealed: Vec<Placeholder>,
    /// Diagnostics for responses that reported an error or had no data.
    pub soft_errors: Vec<String>,
    /// Message of the failure that aborted the run, if any.
    pub failure: Option<String>,
}

pub struct VisualizationLoader<S, D = TracingSink> {
    source: S,
    sink: D,
    config: LoaderConfig,
}

impl<S: JsonSource> VisualizationLoader<S> {
    pub fn new(source: S, config: LoaderConfig) -> Self {
        Self::with_sink(source, TracingSink, config)
    }
}

impl<S: JsonSource, D: DiagnosticSink> VisualizationLoader<S, D> {
    pub fn with_sink(source: S, sink: D, config: LoaderConfig) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    /// Runs once when the page is ready.
    ///
    /// Both requests share one failure boundary: a failed fetch or parse of the
    /// visualizations skips the sentiment request. The failure is logged and
    /// shown as a banner in the first `container_class` element. The only `Err`
    /// returned is the banner itself failing to attach.
    pub async fn on_page_ready<P: Page>(&self, page: &mut P) -> anyhow::Result<LoadOutcome> {
        let mut outcome = LoadOutcome::default();

        if let Err(err) = self.load_all(page, &mut outcome).await {
            let message = err.to_string();
            self.sink
                .log(&format!("Error fetching visualizations: {}", message));
            outcome.failure = Some(message.clone());
            page.append_alert(&self.config.container_class, Alert::load_failure(&message))?;
        }

        Ok(outcome)
    }

    async fn load_all<P: Page>(&self, page: &mut P, outcome: &mut LoadOutcome) -> anyhow::Result<()> {
        self.load::<VisualizationResponse, P>(&self.config.visualizations_path, page, outcome)
            .await?;
        self.load::<SentimentResponse, P>(&self.config.sentiment_path, page, outcome)
            .await
    }

    async fn load<R: PlotResponse, P: Page>(
        &self,
        path: &str,
        page: &mut P,
        outcome: &mut LoadOutcome,
    ) -> anyhow::Result<()> {
        info!(endpoint = path, "Requesting plots");
        let body = self.source.get_json(path).await?;

        match R::accept(R::from_body(body)?) {
            Ok(response) => reveal(&response, page, outcome),
            Err(message) => {
                self.sink.log(&message);
                outcome.soft_errors.push(message);
                Ok(())
            }
        }
    }
}

fn reveal<R: PlotResponse, P: Page>(
    response: &R,
    page: &mut P,
    outcome: &mut LoadOutcome,
) -> anyhow::Result<()> {
    for &placeholder in R::PLACEHOLDERS {
        let element_id = placeholder.element_id();
        let Some(payload) = response.payload(placeholder) else {
            debug!(
                placeholder = element_id,
                field = placeholder.field_name(),
                "No plot in response"
            );
            continue;
        };
        if !page.contains(element_id) {
            debug!(placeholder = element_id, "Placeholder not on page");
            continue;
        }
        page.set_image_source(element_id, &payload.data_uri())?;
        page.set_opacity(element_id, REVEALED_OPACITY)?;
        outcome.revealed.push(placeholder);
    }
    Ok(())
}
