//! Loads server-rendered plot images into a page's placeholders.
//!
//! On page-ready the loader requests the visualizations endpoint, then the
//! sentiment endpoint, and sets each placeholder's source to a PNG data URI
//! built from the base64 payload in the response. A response carrying an
//! `error` is logged and skipped. A transport or parse failure stops the run
//! and appends an error banner to the page container.
//!
//! ```no_run
//! use plot_loader::{BlockingLoader, Document, LoaderConfig};
//!
//! let config = LoaderConfig::new("http://127.0.0.1:5000/")?;
//! let loader = BlockingLoader::connect(config, true)?;
//! let mut page = Document::new()
//!     .with_image("total-placeholder")
//!     .with_image("sentiment-placeholder")
//!     .with_container("container");
//! let outcome = loader.on_page_ready(&mut page)?;
//! println!("revealed {:?}", outcome.revealed);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod clients;
pub mod config;
pub mod diagnostics;
pub mod loader;
pub mod models;
pub mod page;
pub mod utils;

pub use clients::{HttpJsonClient, JsonSource};
pub use config::LoaderConfig;
pub use diagnostics::{DiagnosticSink, RecordingSink, TracingSink};
pub use loader::{BlockingLoader, LoadOutcome, VisualizationLoader};
pub use models::{ImagePayload, Placeholder, PlotResponse, SentimentResponse, VisualizationResponse};
pub use page::{Alert, Document, Page};
pub use utils::init_tracing;
