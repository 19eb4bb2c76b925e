//! A worked example of a theme built on motif, plus the host-side helpers
//! its CLI uses.
//!
//! The `theme-playground` theme declares:
//!
//! - config: `title` (required), `description` (optional), `sitemap`
//!   (defaults to `true`), `site` (optional base URL)
//! - slots: `Heading`, `Footer`
//! - pages: `home` (`/`), `about` (`/about`), `posts` (`/posts`)
//! - sub-integrations: `sitemap` when `sitemap` is enabled
//!
//! A site uses it with a usage document such as:
//!
//! ```yaml
//! config:
//!   title: Hey!
//!   description: This is a theme created using motif
//! pages:
//!   posts: /blog
//! overrides:
//!   css:
//!     - ./custom.css
//!   components:
//!     Heading: ./CustomHeading
//! ```

use clap::ValueEnum;
use motif::{
    FieldSpec, Integration, Predicate, ResolutionError, Schema, SubIntegration, ThemeDefinition,
};
use serde::Serialize;
use serde_json::json;

/// Name of the example theme.
pub const THEME_NAME: &str = "theme-playground";

/// Builds the `theme-playground` definition.
pub fn theme() -> ThemeDefinition {
    ThemeDefinition::named(THEME_NAME)
        .schema(
            Schema::new()
                .field("title", FieldSpec::string())
                .field("description", FieldSpec::string().optional())
                .field("sitemap", FieldSpec::boolean().default(true))
                .field("site", FieldSpec::string().optional()),
        )
        .component("Heading", "./components/Heading")
        .component("Footer", "./components/Footer")
        .page("home", "/")
        .page("about", "/about")
        .page("posts", "/posts")
        .css("./styles/theme.css")
        .integration(SubIntegration::new(
            "sitemap",
            Predicate::enabled("sitemap"),
            |config| {
                let integration = Integration::new("sitemap");
                Ok(match config.get_str("site") {
                    Some(site) => integration.with_options(json!({ "site": site })),
                    None => integration,
                })
            },
        ))
}

/// Output format for serialized documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

/// Serializes `value` in the requested format.
pub fn render<T: Serialize>(value: &T, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    })
}

/// Formats a resolution failure for the terminal.
///
/// The first line carries the error kind and, when known, where it
/// happened: `error[unknown-page] at blog: ...`.
pub fn describe_error(err: &ResolutionError) -> String {
    match err.path() {
        Some(path) => format!("error[{}] at {}: {}", err.kind(), path, err),
        None => format!("error[{}]: {}", err.kind(), err),
    }
}
