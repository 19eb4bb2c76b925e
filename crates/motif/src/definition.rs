//! Theme definitions, as declared by theme package authors.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::integration::SubIntegration;
use crate::overrides::ComponentRef;
use crate::resolve::{resolve, ThemeBuildConfig};
use crate::schema::Schema;
use crate::usage::ThemeUsage;

/// Everything a theme package declares: its configuration schema, default
/// component slots, default pages, default CSS, and conditional
/// sub-integrations.
///
/// A definition is built once when the theme is loaded and only read after
/// that; [`resolve`](ThemeDefinition::resolve) never mutates it.
///
/// # Example
///
/// ```rust
/// use motif::{FieldSpec, Integration, Predicate, Schema, SubIntegration, ThemeDefinition};
///
/// let theme = ThemeDefinition::named("theme-playground")
///     .schema(
///         Schema::new()
///             .field("title", FieldSpec::string())
///             .field("sitemap", FieldSpec::boolean().default(true)),
///     )
///     .component("Heading", "./components/Heading")
///     .page("home", "/")
///     .page("about", "/about")
///     .integration(SubIntegration::fixed(
///         Predicate::enabled("sitemap"),
///         Integration::new("sitemap"),
///     ));
///
/// assert_eq!(theme.name(), "theme-playground");
/// assert_eq!(theme.default_pages().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeDefinition {
    name: String,
    schema: Schema,
    default_components: BTreeMap<String, ComponentRef>,
    default_pages: BTreeMap<String, String>,
    default_css: Vec<String>,
    integrations: Vec<SubIntegration>,
}

impl ThemeDefinition {
    /// Creates a theme with the given name and nothing declared.
    ///
    /// The empty schema accepts only an empty configuration.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: Schema::new(),
            default_components: BTreeMap::new(),
            default_pages: BTreeMap::new(),
            default_css: Vec::new(),
            integrations: Vec::new(),
        }
    }

    /// Sets the configuration schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Declares a component slot and its default implementation.
    pub fn component(mut self, slot: impl Into<String>, default: impl Into<ComponentRef>) -> Self {
        self.default_components.insert(slot.into(), default.into());
        self
    }

    /// Declares a page and its default route.
    pub fn page(mut self, key: impl Into<String>, route: impl Into<String>) -> Self {
        self.default_pages.insert(key.into(), route.into());
        self
    }

    /// Appends a CSS asset the theme always includes.
    pub fn css(mut self, path: impl Into<String>) -> Self {
        self.default_css.push(path.into());
        self
    }

    /// Appends a sub-integration. Declaration order is composition order.
    pub fn integration(mut self, sub: SubIntegration) -> Self {
        self.integrations.push(sub);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config_schema(&self) -> &Schema {
        &self.schema
    }

    pub fn default_components(&self) -> &BTreeMap<String, ComponentRef> {
        &self.default_components
    }

    pub fn default_pages(&self) -> &BTreeMap<String, String> {
        &self.default_pages
    }

    pub fn default_css(&self) -> &[String] {
        &self.default_css
    }

    pub fn sub_integrations(&self) -> &[SubIntegration] {
        &self.integrations
    }

    /// Resolves this theme against a site's usage. See [`resolve`].
    pub fn resolve(&self, usage: &ThemeUsage) -> Result<ThemeBuildConfig> {
        resolve(self, usage)
    }
}
