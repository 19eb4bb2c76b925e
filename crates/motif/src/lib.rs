//! Motif - theme composition and override resolution.
//!
//! A *theme* is a reusable bundle that declares a typed configuration
//! schema, default component slots, default page routes, default CSS, and a
//! list of conditionally-included sub-integrations. A *site* uses a theme by
//! supplying a concrete configuration plus optional overrides. Motif turns
//! the pair into one final, internally consistent [`ThemeBuildConfig`], or
//! a precise [`ResolutionError`] saying what is wrong.
//!
//! # Quick Start
//!
//! ```rust
//! use motif::{
//!     FieldSpec, Integration, Predicate, Schema, SubIntegration, ThemeDefinition, ThemeUsage,
//! };
//! use serde_json::json;
//!
//! // The theme author declares the theme once.
//! let theme = ThemeDefinition::named("theme-playground")
//!     .schema(
//!         Schema::new()
//!             .field("title", FieldSpec::string())
//!             .field("description", FieldSpec::string().optional())
//!             .field("sitemap", FieldSpec::boolean().default(true)),
//!     )
//!     .component("Heading", "./components/Heading")
//!     .page("home", "/")
//!     .page("about", "/about")
//!     .integration(SubIntegration::fixed(
//!         Predicate::enabled("sitemap"),
//!         Integration::new("sitemap"),
//!     ));
//!
//! // The site owner supplies config and overrides.
//! let usage = ThemeUsage::new()
//!     .config(json!({ "title": "Hey!" }))
//!     .page("about", "/team")
//!     .css("./custom.css");
//!
//! let build = theme.resolve(&usage).unwrap();
//! assert_eq!(build.pages()["about"], "/team");
//! assert_eq!(build.css(), ["./custom.css"]);
//! assert_eq!(build.integrations()[0].name(), "sitemap");
//! ```
//!
//! # Resolution
//!
//! ```text
//! ThemeDefinition + ThemeUsage
//!   → validate      (schema: closed, typed, defaulted)
//!   → merge pages   (key must exist; reroute or remove)
//!   → merge slots   (slot must exist; replace 1:1)
//!   → concat css    (theme first, then site; append-only)
//!   → compose       (declaration order, passing predicates only)
//!   → ThemeBuildConfig
//! ```
//!
//! Every step is fail-fast: the first error aborts resolution, and no
//! partially-resolved config is ever returned.
//!
//! # Concurrency
//!
//! Resolution is synchronous and holds no shared state. Definitions and
//! usages are `Send + Sync`, so independent resolutions can run on separate
//! threads without coordination.
//!
//! # Logging
//!
//! Motif emits `tracing` events at `debug` and `trace` level for each step.
//! It never installs a subscriber; that is left to the host.

mod definition;
mod error;
mod integration;
mod overrides;
mod resolve;
mod schema;
mod usage;

// Re-export public API
pub use definition::ThemeDefinition;
pub use error::{
    BoxError, ErrorKind, IntegrationError, LoadError, MergeError, ResolutionError, Result,
    SchemaError,
};
pub use integration::{
    compose, Integration, IntegrationFactory, Predicate, PredicateFn, SubIntegration,
};
pub use overrides::{
    concat_css, merge_components, merge_overrides, merge_pages, ComponentRef, MergedOverrides,
    PageOverride,
};
pub use resolve::{resolve, ThemeBuildConfig};
pub use schema::{validate, FieldKind, FieldSpec, Schema, ValidatedConfig};
pub use usage::ThemeUsage;
