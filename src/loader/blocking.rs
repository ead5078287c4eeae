use tokio::runtime::Runtime;

use super::{LoadOutcome, VisualizationLoader};
use crate::clients::{HttpJsonClient, JsonSource};
use crate::config::LoaderConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::init_tracing;
use crate::page::Page;

/// Drives a [`VisualizationLoader`] on its own runtime for synchronous hosts.
pub struct BlockingLoader<S, D = TracingSink> {
    runtime: Runtime,
    loader: VisualizationLoader<S, D>,
}

impl BlockingLoader<HttpJsonClient> {
    /// HTTP-backed loader. `enable_logs` installs the stderr subscriber.
    pub fn connect(config: LoaderConfig, enable_logs: bool) -> anyhow::Result<Self> {
        if enable_logs {
            init_tracing();
        }
        let source = HttpJsonClient::new(config.clone());
        Self::from_loader(VisualizationLoader::new(source, config))
    }
}

impl<S: JsonSource, D: DiagnosticSink> BlockingLoader<S, D> {
    pub fn from_loader(loader: VisualizationLoader<S, D>) -> anyhow::Result<Self> {
        let runtime = Runtime::new()
            .map_err(|e| anyhow::anyhow!("Failed to start runtime: {}", e))?;
        Ok(Self { runtime, loader })
    }

    pub fn on_page_ready<P: Page>(&self, page: &mut P) -> anyhow::Result<LoadOutcome> {
        self.runtime.block_on(self.loader.on_page_ready(page))
    }
}
