//! Provider trait for symbolic evaluation of build configuration.
//!
//! This module defines the `Provider` trait that allows provider symbols
//! referenced from build configuration to be registered and called uniformly
//! by the extraction engine, without executing real build actions.

use std::fmt::Debug;

use crate::Result;
use crate::linking::LinkingInfo;
use crate::printer::Printer;

/// An info object produced by a provider call.
///
/// Info objects are what configuration code receives back when it calls a
/// provider symbol; the extractor only ever asks them for the metadata they
/// carry.
pub trait ProviderInfo: Debug {
    /// Linking metadata carried by this info object, if any.
    fn linking_info(&self) -> Option<&LinkingInfo>;
}

/// Trait for provider symbols callable from build configuration.
///
/// Each provider implements this trait to handle construction of its info
/// objects. Providers are registered with the `ProviderRegistry` and looked
/// up by name when the engine encounters a provider reference.
///
/// # Example
///
/// ```ignore
/// pub struct FakeLinkInfoProvider;
///
/// impl Provider for FakeLinkInfoProvider {
///     fn name(&self) -> &'static str { "link_info" }
///     fn description(&self) -> &'static str { "Placeholder linking metadata" }
///     // ...
/// }
/// ```
pub trait Provider: Send + Sync {
    /// Provider name as referenced from configuration (e.g., "link_info").
    fn name(&self) -> &'static str;

    /// Human-readable description for help text.
    fn description(&self) -> &'static str;

    /// Construct an info object from an evaluated argument.
    ///
    /// The argument is the linking metadata the configuration supplied, or
    /// `None` when the call site passed nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation of the provider call fails. The
    /// signature is fallible for the benefit of real implementations;
    /// placeholder providers never fail.
    fn create(&self, linking_info: Option<LinkingInfo>) -> Result<Box<dyn ProviderInfo>>;

    /// Render the provider's textual representation into `printer`.
    fn repr(&self, printer: &mut Printer);
}
