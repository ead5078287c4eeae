use std::collections::HashMap;

use super::{Alert, Page};
use crate::models::ImagePayload;

/// An image-capable element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageElement {
    pub src: Option<String>,
    pub opacity: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
struct Container {
    class_names: Vec<String>,
    alerts: Vec<Alert>,
}

/// An in-memory page: image elements by id and block containers in document order.
#[derive(Clone, Debug, Default)]
pub struct Document {
    images: HashMap<String, ImageElement>,
    containers: Vec<Container>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, element_id: &str) -> Self {
        self.images.insert(element_id.to_string(), ImageElement::default());
        self
    }

    /// Adds a container. `class_attr` is a whitespace separated class list.
    pub fn with_container(mut self, class_attr: &str) -> Self {
        self.containers.push(Container {
            class_names: class_attr.split_whitespace().map(str::to_string).collect(),
            alerts: Vec::new(),
        });
        self
    }

    pub fn image(&self, element_id: &str) -> Option<&ImageElement> {
        self.images.get(element_id)
    }

    /// Decoded PNG bytes of an element whose source is a PNG data URI.
    pub fn image_bytes(&self, element_id: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let Some(src) = self.images.get(element_id).and_then(|el| el.src.as_deref()) else {
            return Ok(None);
        };
        match ImagePayload::from_data_uri(src) {
            Some(payload) => payload.decode().map(Some),
            None => Ok(None),
        }
    }

    /// Every alert on the page, in container order.
    pub fn alerts(&self) -> Vec<&Alert> {
        self.containers.iter().flat_map(|c| c.alerts.iter()).collect()
    }

    fn image_mut(&mut self, element_id: &str) -> anyhow::Result<&mut ImageElement> {
        self.images
            .get_mut(element_id)
            .ok_or_else(|| anyhow::anyhow!("No element with id '{}'", element_id))
    }
}

impl Page for Document {
    fn contains(&self, element_id: &str) -> bool {
        self.images.contains_key(element_id)
    }

    fn set_image_source(&mut self, element_id: &str, src: &str) -> anyhow::Result<()> {
        self.image_mut(element_id)?.src = Some(src.to_string());
        Ok(())
    }

    fn set_opacity(&mut self, element_id: &str, opacity: f32) -> anyhow::Result<()> {
        self.image_mut(element_id)?.opacity = Some(opacity);
        Ok(())
    }

    fn append_alert(&mut self, container_class: &str, alert: Alert) -> anyhow::Result<()> {
        let container = self
            .containers
            .iter_mut()
            .find(|c| c.class_names.iter().any(|name| name == container_class))
            .ok_or_else(|| anyhow::anyhow!("No element with class '{}'", container_class))?;
        container.alerts.push(alert);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_goes_to_first_matching_container() {
        let mut doc = Document::new()
            .with_container("navbar")
            .with_container("container mt-5")
            .with_container("container");
        doc.append_alert("container", Alert::load_failure("boom")).unwrap();

        assert_eq!(doc.containers[1].alerts.len(), 1);
        assert!(doc.containers[2].alerts.is_empty());
        assert_eq!(
            doc.alerts()[0].text,
            "An error occurred while loading visualizations: boom"
        );
    }

    #[test]
    fn missing_container_is_an_error() {
        let mut doc = Document::new().with_container("navbar");
        assert!(doc.append_alert("container", Alert::load_failure("boom")).is_err());
    }

    #[test]
    fn image_bytes_from_data_uri() {
        let mut doc = Document::new().with_image("total-placeholder");
        assert_eq!(doc.image_bytes("total-placeholder").unwrap(), None);

        doc.set_image_source("total-placeholder", "data:image/png;base64,QUFB")
            .unwrap();
        assert_eq!(
            doc.image_bytes("total-placeholder").unwrap().as_deref(),
            Some(&b"AAA"[..])
        );
    }
}
