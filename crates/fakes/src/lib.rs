//! Placeholder providers for the confdoc extractor.
//!
//! When the extractor interprets build configuration it must be able to call
//! provider symbols without running real build actions. The providers here
//! satisfy the `confdoc-core` contract with inert stand-ins: every factory
//! call succeeds, every info object carries no metadata, and every textual
//! rendering is empty.

use confdoc_core::{LinkingInfo, Printer, Provider, ProviderInfo, ProviderRegistry, Result};
use tracing::trace;

/// Info object standing in for real linking metadata.
///
/// Holds no state; the accessor always reports that no linking information
/// is available.
#[derive(Debug, Default)]
pub struct FakeLinkInfo;

impl FakeLinkInfo {
    /// Create a new placeholder info object.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProviderInfo for FakeLinkInfo {
    fn linking_info(&self) -> Option<&LinkingInfo> {
        None
    }
}

/// Provider symbol for linking metadata.
///
/// Accepts any argument, ignores its content, and hands back a fresh
/// [`FakeLinkInfo`]. The signature stays fallible for the benefit of a real
/// implementation; this one never fails.
#[derive(Debug, Default)]
pub struct FakeLinkInfoProvider;

impl FakeLinkInfoProvider {
    /// Create a new placeholder provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Provider for FakeLinkInfoProvider {
    fn name(&self) -> &'static str {
        "link_info"
    }

    fn description(&self) -> &'static str {
        "Linking metadata exposed to dependents (placeholder)"
    }

    fn create(&self, linking_info: Option<LinkingInfo>) -> Result<Box<dyn ProviderInfo>> {
        trace!(
            provider = self.name(),
            ignored_argument = linking_info.is_some(),
            "Constructing placeholder info object"
        );
        Ok(Box::new(FakeLinkInfo::new()))
    }

    fn repr(&self, _printer: &mut Printer) {}
}

/// Install every placeholder provider this crate defines.
///
/// The extractor calls this while setting up the evaluation environment, so
/// that configuration referencing these symbols resolves without real build
/// logic.
pub fn register_fakes(registry: &mut ProviderRegistry) {
    registry.register(FakeLinkInfoProvider::new());
}
