//! Top-level resolution of a theme against a site's usage.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::definition::ThemeDefinition;
use crate::error::Result;
use crate::integration::{compose, Integration};
use crate::overrides::{merge_overrides, ComponentRef, MergedOverrides};
use crate::schema::{validate_counting, ValidatedConfig};
use crate::usage::ThemeUsage;

/// The final, resolved configuration for one theme in one site build.
///
/// This is what the host pipeline consumes: it registers
/// [`components`](Self::components) with its renderer,
/// [`pages`](Self::pages) with its router, appends [`css`](Self::css) to its
/// asset pipeline, and registers [`integrations`](Self::integrations), in
/// order, with its plugin system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeBuildConfig {
    theme: String,
    config: ValidatedConfig,
    components: BTreeMap<String, ComponentRef>,
    pages: BTreeMap<String, String>,
    css: Vec<String>,
    integrations: Vec<Integration>,
}

impl ThemeBuildConfig {
    /// Name of the theme this config was resolved from.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Final slot map: every theme slot, overridden or default.
    pub fn components(&self) -> &BTreeMap<String, ComponentRef> {
        &self.components
    }

    /// Final route map. Removed pages are absent.
    pub fn pages(&self) -> &BTreeMap<String, String> {
        &self.pages
    }

    /// Theme CSS followed by owner CSS.
    pub fn css(&self) -> &[String] {
        &self.css
    }

    /// Included integrations, in declaration order.
    pub fn integrations(&self) -> &[Integration] {
        &self.integrations
    }
}

/// Resolves `definition` against `usage` into a [`ThemeBuildConfig`].
///
/// Steps run in order and the first failure aborts resolution:
///
/// 1. validate the usage's raw config against the theme schema;
/// 2. merge page overrides;
/// 3. merge component overrides;
/// 4. append owner CSS after theme CSS;
/// 5. compose sub-integrations against the validated config.
///
/// Resolution keeps no state between calls. Equal inputs give equal outputs;
/// the only side effects are those of the integration factories in step 5.
///
/// # Example
///
/// ```rust
/// use motif::{resolve, FieldSpec, Schema, ThemeDefinition, ThemeUsage};
/// use serde_json::json;
///
/// let theme = ThemeDefinition::named("playground")
///     .schema(Schema::new().field("title", FieldSpec::string()))
///     .page("home", "/")
///     .page("about", "/about");
///
/// let usage = ThemeUsage::new()
///     .config(json!({ "title": "Hey!" }))
///     .page("about", "/team");
///
/// let build = resolve(&theme, &usage).unwrap();
/// assert_eq!(build.pages()["about"], "/team");
///
/// let bad = ThemeUsage::new()
///     .config(json!({ "title": "Hey!" }))
///     .page("blog", "/b");
/// assert!(resolve(&theme, &bad).is_err());
/// ```
pub fn resolve(definition: &ThemeDefinition, usage: &ThemeUsage) -> Result<ThemeBuildConfig> {
    debug!(theme = definition.name(), "resolving theme");

    let (config, defaulted) = validate_counting(definition.config_schema(), usage.raw_config())?;
    debug!(
        theme = definition.name(),
        fields = config.len(),
        defaulted,
        "validated configuration"
    );

    let MergedOverrides {
        pages,
        components,
        css,
    } = merge_overrides(definition, usage)?;

    let integrations = compose(definition.sub_integrations(), &config)?;

    debug!(
        theme = definition.name(),
        integrations = integrations.len(),
        "resolved theme"
    );

    Ok(ThemeBuildConfig {
        theme: definition.name().to_string(),
        config,
        components,
        pages,
        css,
        integrations,
    })
}
