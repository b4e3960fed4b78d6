//! Provider registry.
//!
//! This module provides a registry for providers, allowing the extraction
//! engine to look up provider symbols by name while interpreting build
//! configuration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::provider::Provider;

/// Registry of provider symbols.
///
/// The registry maintains the set of providers visible to configuration code
/// and provides lookup by name.
#[derive(Default)]
pub struct ProviderRegistry {
    /// Providers indexed by name.
    providers: HashMap<&'static str, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider.
    ///
    /// If a provider with the same name already exists, it will be replaced.
    pub fn register<P: Provider + 'static>(&mut self, provider: P) {
        let name = provider.name();
        self.providers.insert(name, Arc::new(provider));
    }

    /// Register a provider wrapped in Arc.
    ///
    /// Useful when the same provider instance needs to be shared.
    pub fn register_arc(&mut self, provider: Arc<dyn Provider>) {
        let name = provider.name();
        self.providers.insert(name, provider);
    }

    /// Get a provider by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.get(name)
    }

    /// Iterate over all registered providers.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Provider>> {
        self.providers.values()
    }

    /// Get the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Get all provider names.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.keys().copied().collect()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use crate::linking::LinkingInfo;
    use crate::printer::Printer;
    use crate::provider::ProviderInfo;

    #[derive(Debug)]
    struct TestInfo;

    impl ProviderInfo for TestInfo {
        fn linking_info(&self) -> Option<&LinkingInfo> {
            None
        }
    }

    struct TestProvider {
        name: &'static str,
    }

    impl Provider for TestProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "test provider"
        }

        fn create(&self, _linking_info: Option<LinkingInfo>) -> Result<Box<dyn ProviderInfo>> {
            Ok(Box::new(TestInfo))
        }

        fn repr(&self, _printer: &mut Printer) {}
    }

    #[test]
    fn register_and_get() {
        let mut registry = ProviderRegistry::new();
        assert!(registry.is_empty());

        registry.register(TestProvider { name: "link_info" });
        assert_eq!(registry.len(), 1);
        assert!(registry.get("link_info").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn register_replaces_same_name() {
        let mut registry = ProviderRegistry::new();
        registry.register(TestProvider { name: "link_info" });
        registry.register(TestProvider { name: "link_info" });
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_arc_shares_instance() {
        let mut registry = ProviderRegistry::new();
        let provider: Arc<dyn Provider> = Arc::new(TestProvider { name: "shared" });
        registry.register_arc(Arc::clone(&provider));
        assert!(registry.get("shared").is_some());
    }

    #[test]
    fn names_lists_registered_providers() {
        let mut registry = ProviderRegistry::new();
        registry.register(TestProvider { name: "a" });
        registry.register(TestProvider { name: "b" });

        let mut names = registry.names();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn debug_lists_names() {
        let mut registry = ProviderRegistry::new();
        registry.register(TestProvider { name: "link_info" });
        let rendered = format!("{registry:?}");
        assert!(rendered.contains("link_info"));
    }
}
