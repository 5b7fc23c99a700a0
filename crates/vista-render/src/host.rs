//! Registration boundary towards a host debugger.
//!
//! A host keeps named collections of patterns; every pattern in the
//! `vista` collection is rendered by resolving through a [`Registry`].

use crate::registry::{registry, PatternInfo, Registry};

/// Collection name under which patterns are announced.
pub const COLLECTION: &str = "vista";

/// Receives pattern announcements.
pub trait RegistrationSink {
    /// Whether `collection` was announced to this sink before.
    fn is_registered(&self, collection: &str) -> bool;

    /// Route values matching `pattern` to the collection.
    fn add_pattern(&mut self, collection: &str, pattern: &PatternInfo);
}

/// Announce every binding of `registry`, in order.
///
/// Returns the number of patterns announced; zero if the sink already
/// carries the collection.
pub fn announce(registry: &Registry, sink: &mut dyn RegistrationSink) -> usize {
    if sink.is_registered(COLLECTION) {
        tracing::debug!(collection = COLLECTION, "already registered");
        return 0;
    }
    for binding in registry.bindings() {
        sink.add_pattern(COLLECTION, &binding.info());
    }
    tracing::debug!(
        collection = COLLECTION,
        count = registry.len(),
        "registered patterns"
    );
    registry.len()
}

/// Announce the builtin catalogue.
pub fn register_all(sink: &mut dyn RegistrationSink) -> usize {
    announce(registry(), sink)
}
