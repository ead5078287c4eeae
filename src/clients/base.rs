use std::future::Future;

use serde_json::Value;

/// Fetches an endpoint and parses its body as JSON.
///
/// The response status is not inspected: a non-2xx response with a JSON body
/// is returned like any other. Transport failures and non-JSON bodies are errors.
pub trait JsonSource {
    fn get_json(&self, path: &str) -> impl Future<Output = anyhow::Result<Value>> + Send;
}

impl<T: JsonSource> JsonSource for &T {
    fn get_json(&self, path: &str) -> impl Future<Output = anyhow::Result<Value>> + Send {
        (**self).get_json(path)
    }
}
