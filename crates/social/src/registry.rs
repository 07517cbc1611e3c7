//! Publisher registry.
//!
//! Maps platform ids to publisher strategies so the fan-out orchestrator can
//! dispatch without branching on platform names. Platforms that exist as
//! connections but have no publisher (seloger, leboncoin, ...) are a stable
//! capability gap, reported with [`AUTO_PUBLISH_UNAVAILABLE`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::GraphClient;
use crate::publisher::{FacebookPublisher, InstagramPublisher, PlatformPublisher};

/// Result message for platforms without automatic publishing support.
pub const AUTO_PUBLISH_UNAVAILABLE: &str = "automatic publishing not available";

#[derive(Default)]
pub struct PublisherRegistry {
    publishers: HashMap<&'static str, Arc<dyn PlatformPublisher>>,
}

impl PublisherRegistry {
    /// Empty registry; mostly useful in tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in publishers (Facebook, Instagram) wired to
    /// the given Graph API client.
    pub fn with_defaults(graph: GraphClient) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FacebookPublisher::new(graph.clone())));
        registry.register(Arc::new(InstagramPublisher::new(graph)));
        registry
    }

    pub fn register(&mut self, publisher: Arc<dyn PlatformPublisher>) {
        self.publishers.insert(publisher.id(), publisher);
    }

    pub fn get(&self, platform_id: &str) -> Option<Arc<dyn PlatformPublisher>> {
        self.publishers.get(platform_id).cloned()
    }

    pub fn supports(&self, platform_id: &str) -> bool {
        self.publishers.contains_key(platform_id)
    }
}
