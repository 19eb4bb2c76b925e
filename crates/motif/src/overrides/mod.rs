//! Merging owner overrides into theme defaults.
//!
//! Each category has its own precedence rule:
//!
//! | Category   | Shape                  | Rule                                             |
//! |------------|------------------------|--------------------------------------------------|
//! | Pages      | key → route            | key must exist; replace route, or remove the key |
//! | Components | slot → component       | slot must exist; replace 1:1                     |
//! | CSS        | ordered list of paths  | append after defaults; no dedup                  |
//!
//! Keyed categories fail fast: an override naming an undeclared key aborts
//! the merge, and nothing partially merged is returned.

mod components;
mod css;
mod pages;

use std::collections::BTreeMap;

use tracing::debug;

pub use components::{merge_components, ComponentRef};
pub use css::concat_css;
pub use pages::{merge_pages, PageOverride};

use crate::definition::ThemeDefinition;
use crate::error::MergeError;
use crate::usage::ThemeUsage;

/// The merged pages, components, and CSS for one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedOverrides {
    pub pages: BTreeMap<String, String>,
    pub components: BTreeMap<String, ComponentRef>,
    pub css: Vec<String>,
}

/// Merges all three override categories, pages first, then components,
/// then CSS.
pub fn merge_overrides(
    definition: &ThemeDefinition,
    usage: &ThemeUsage,
) -> Result<MergedOverrides, MergeError> {
    let pages = merge_pages(definition.default_pages(), usage.page_overrides())?;
    let components = merge_components(
        definition.default_components(),
        usage.component_overrides(),
    )?;
    let css = concat_css(definition.default_css(), usage.css_overrides());

    debug!(
        theme = definition.name(),
        pages = pages.len(),
        removed = definition.default_pages().len() - pages.len(),
        components = components.len(),
        css = css.len(),
        "merged overrides"
    );

    Ok(MergedOverrides {
        pages,
        components,
        css,
    })
}
