//! Conditional sub-integrations and their composition.
//!
//! A theme lists [`SubIntegration`]s in the order it wants them registered.
//! Each pairs a [`Predicate`] with an [`IntegrationFactory`]. At resolution
//! time [`compose`] evaluates the predicates against the validated config and
//! materializes only the integrations whose predicates pass, keeping
//! declaration order.
//!
//! ```text
//! declared:   [X: always] [Y: enabled(search)] [Z: enabled(sitemap)]
//! config:     { search: false, sitemap: true }
//! composed:   [X, Z]
//! ```
//!
//! The host pipeline may rely on that order (integrations can depend on each
//! other's side effects), so it is never changed.

mod compose;
mod predicate;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

pub use compose::compose;
pub use predicate::{Predicate, PredicateFn};

use crate::error::BoxError;
use crate::schema::ValidatedConfig;

/// A materialized integration, ready for the host's plugin system.
///
/// The engine treats integrations as opaque descriptors: a name the host
/// knows how to register, and free-form options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Integration {
    name: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    options: Value,
}

impl Integration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
        }
    }

    /// Sets the integration's options.
    pub fn with_options(mut self, options: impl Into<Value>) -> Self {
        self.options = options.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The integration's options, `Value::Null` if none were set.
    pub fn options(&self) -> &Value {
        &self.options
    }
}

/// Builds an [`Integration`] from the validated config.
///
/// Factories run at most once per resolution, and only if their predicate
/// passed. A factory error is fatal to the resolution.
///
/// Closures with the matching signature implement this trait.
pub trait IntegrationFactory: Send + Sync {
    fn create(&self, config: &ValidatedConfig) -> Result<Integration, BoxError>;
}

impl<F> IntegrationFactory for F
where
    F: Fn(&ValidatedConfig) -> Result<Integration, BoxError> + Send + Sync,
{
    fn create(&self, config: &ValidatedConfig) -> Result<Integration, BoxError> {
        self(config)
    }
}

/// A conditionally-included integration: a name, a predicate, and a factory.
///
/// # Example
///
/// ```rust
/// use motif::{Integration, Predicate, SubIntegration};
/// use serde_json::json;
///
/// let sitemap = SubIntegration::new("sitemap", Predicate::enabled("sitemap"), |config| {
///     Ok(Integration::new("sitemap").with_options(json!({
///         "site": config.get_str("site"),
///     })))
/// });
/// assert_eq!(sitemap.name(), "sitemap");
/// ```
#[derive(Clone)]
pub struct SubIntegration {
    name: String,
    predicate: Predicate,
    factory: Arc<dyn IntegrationFactory>,
}

impl SubIntegration {
    /// Creates a sub-integration from a factory closure.
    pub fn new<F>(name: impl Into<String>, predicate: Predicate, factory: F) -> Self
    where
        F: Fn(&ValidatedConfig) -> Result<Integration, BoxError> + Send + Sync + 'static,
    {
        Self::with_factory(name, predicate, factory)
    }

    /// Creates a sub-integration from any [`IntegrationFactory`].
    pub fn with_factory(
        name: impl Into<String>,
        predicate: Predicate,
        factory: impl IntegrationFactory + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate,
            factory: Arc::new(factory),
        }
    }

    /// A sub-integration that always yields a clone of `integration` when
    /// `predicate` holds.
    pub fn fixed(predicate: Predicate, integration: Integration) -> Self {
        let name = integration.name().to_string();
        Self::new(name, predicate, move |_: &ValidatedConfig| {
            Ok(integration.clone())
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Returns true if this sub-integration should be included for `config`.
    pub fn is_enabled(&self, config: &ValidatedConfig) -> bool {
        self.predicate.evaluate(config)
    }

    /// Runs the factory.
    pub fn materialize(&self, config: &ValidatedConfig) -> Result<Integration, BoxError> {
        self.factory.create(config)
    }
}

impl fmt::Debug for SubIntegration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubIntegration")
            .field("name", &self.name)
            .field("predicate", &self.predicate)
            .finish_non_exhaustive()
    }
}
