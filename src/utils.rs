pub mod helpers;
pub mod logger;

pub use helpers::{deserialize_truthy, is_truthy, truthy_text};
pub use logger::init_tracing;
