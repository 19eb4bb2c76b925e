//! Page route overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::MergeError;

/// What a site owner wants done with one of the theme's pages.
///
/// In usage documents a route string maps to [`PageOverride::Route`] and
/// `null` maps to [`PageOverride::Remove`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum PageOverride {
    /// Serve the page at this route instead of the theme's default.
    Route(String),
    /// Drop the page from the build.
    Remove,
}

impl PageOverride {
    pub fn route(route: impl Into<String>) -> Self {
        PageOverride::Route(route.into())
    }

    pub fn is_remove(&self) -> bool {
        matches!(self, PageOverride::Remove)
    }
}

impl From<Option<String>> for PageOverride {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(route) => PageOverride::Route(route),
            None => PageOverride::Remove,
        }
    }
}

impl From<PageOverride> for Option<String> {
    fn from(value: PageOverride) -> Self {
        match value {
            PageOverride::Route(route) => Some(route),
            PageOverride::Remove => None,
        }
    }
}

impl From<&str> for PageOverride {
    fn from(route: &str) -> Self {
        PageOverride::Route(route.to_string())
    }
}

impl From<String> for PageOverride {
    fn from(route: String) -> Self {
        PageOverride::Route(route)
    }
}

/// Applies page overrides to the theme's default page map.
///
/// Every key in `overrides` must be declared in `defaults`; the first one
/// that is not fails the whole merge with [`MergeError::UnknownPageKey`].
/// Overrides apply in order, so a repeated key takes its last value.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use motif::{merge_pages, PageOverride};
///
/// let defaults = BTreeMap::from([
///     ("home".to_string(), "/".to_string()),
///     ("about".to_string(), "/about".to_string()),
/// ]);
///
/// let pages = merge_pages(&defaults, &[("about".to_string(), PageOverride::route("/team"))]).unwrap();
/// assert_eq!(pages["about"], "/team");
///
/// let pages = merge_pages(&defaults, &[("about".to_string(), PageOverride::Remove)]).unwrap();
/// assert!(!pages.contains_key("about"));
/// ```
pub fn merge_pages(
    defaults: &BTreeMap<String, String>,
    overrides: &[(String, PageOverride)],
) -> Result<BTreeMap<String, String>, MergeError> {
    let mut pages = defaults.clone();
    for (key, target) in overrides {
        if !defaults.contains_key(key) {
            return Err(MergeError::UnknownPageKey { key: key.clone() });
        }
        match target {
            PageOverride::Route(route) => {
                trace!(page = %key, route = %route, "rerouting page");
                pages.insert(key.clone(), route.clone());
            }
            PageOverride::Remove => {
                trace!(page = %key, "removing page");
                pages.remove(key);
            }
        }
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("home".to_string(), "/".to_string()),
            ("about".to_string(), "/about".to_string()),
        ])
    }

    fn ov(key: &str, target: PageOverride) -> (String, PageOverride) {
        (key.to_string(), target)
    }

    #[test]
    fn no_overrides_keeps_defaults() {
        assert_eq!(merge_pages(&defaults(), &[]).unwrap(), defaults());
    }

    #[test]
    fn reroute_replaces_value() {
        let pages = merge_pages(&defaults(), &[ov("about", "/team".into())]).unwrap();
        assert_eq!(
            pages,
            BTreeMap::from([
                ("home".to_string(), "/".to_string()),
                ("about".to_string(), "/team".to_string()),
            ])
        );
    }

    #[test]
    fn remove_drops_key() {
        let pages = merge_pages(&defaults(), &[ov("about", PageOverride::Remove)]).unwrap();
        assert_eq!(
            pages,
            BTreeMap::from([("home".to_string(), "/".to_string())])
        );
    }

    #[test]
    fn unknown_key_fails() {
        let err = merge_pages(&defaults(), &[ov("blog", "/b".into())]).unwrap_err();
        assert_eq!(
            err,
            MergeError::UnknownPageKey {
                key: "blog".to_string()
            }
        );
    }

    #[test]
    fn unknown_key_fails_even_after_valid_overrides() {
        let err = merge_pages(
            &defaults(),
            &[ov("about", "/team".into()), ov("blog", "/b".into())],
        )
        .unwrap_err();
        assert!(matches!(err, MergeError::UnknownPageKey { .. }));
    }

    #[test]
    fn repeated_key_is_last_write_wins() {
        let pages = merge_pages(
            &defaults(),
            &[ov("about", "/team".into()), ov("about", "/people".into())],
        )
        .unwrap();
        assert_eq!(pages["about"], "/people");
    }

    #[test]
    fn removed_key_can_be_overridden_again() {
        let pages = merge_pages(
            &defaults(),
            &[ov("about", PageOverride::Remove), ov("about", "/team".into())],
        )
        .unwrap();
        assert_eq!(pages["about"], "/team");
    }

    #[test]
    fn null_deserializes_to_remove() {
        let parsed: BTreeMap<String, PageOverride> =
            serde_json::from_str(r#"{"about": null, "home": "/start"}"#).unwrap();
        assert_eq!(parsed["about"], PageOverride::Remove);
        assert_eq!(parsed["home"], PageOverride::route("/start"));
    }
}
