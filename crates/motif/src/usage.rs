//! Site-owner usage of a theme: raw configuration plus overrides.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;
use crate::overrides::{ComponentRef, PageOverride};

/// One site's instantiation of a theme.
///
/// Holds the untyped configuration (validated later against the theme's
/// schema) and the three override categories. Every override section is
/// optional; leaving one out is the same as supplying it empty.
///
/// Keyed overrides keep the order they were added in. Adding the same key
/// twice is allowed and the later value wins.
///
/// # Example
///
/// ```rust
/// use motif::ThemeUsage;
/// use serde_json::json;
///
/// let usage = ThemeUsage::new()
///     .config(json!({ "title": "Hey!" }))
///     .page("about", "/team")
///     .remove_page("blog")
///     .css("./custom.css")
///     .component("Heading", "./CustomHeading");
///
/// assert_eq!(usage.page_overrides().len(), 2);
/// ```
///
/// Usage documents mirror what site owners write in their build config:
///
/// ```rust
/// use motif::ThemeUsage;
///
/// let usage = ThemeUsage::from_yaml(r#"
/// config:
///   title: Hey!
/// pages:
///   about: /team
///   blog: null
/// overrides:
///   css: [./custom.css]
///   components:
///     Heading: ./CustomHeading
/// "#).unwrap();
///
/// assert_eq!(usage.css_overrides(), ["./custom.css"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "UsageDocument")]
pub struct ThemeUsage {
    raw_config: Value,
    page_overrides: Vec<(String, PageOverride)>,
    css_overrides: Vec<String>,
    component_overrides: Vec<(String, ComponentRef)>,
}

impl ThemeUsage {
    /// Creates a usage with no configuration and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw configuration.
    pub fn config(mut self, raw: impl Into<Value>) -> Self {
        self.raw_config = raw.into();
        self
    }

    /// Reroutes a theme page.
    pub fn page(mut self, key: impl Into<String>, route: impl Into<String>) -> Self {
        self.page_overrides
            .push((key.into(), PageOverride::Route(route.into())));
        self
    }

    /// Removes a theme page from the build.
    pub fn remove_page(mut self, key: impl Into<String>) -> Self {
        self.page_overrides.push((key.into(), PageOverride::Remove));
        self
    }

    /// Adds a page override of either form.
    pub fn page_override(mut self, key: impl Into<String>, target: PageOverride) -> Self {
        self.page_overrides.push((key.into(), target));
        self
    }

    /// Appends a CSS asset after the theme's own.
    pub fn css(mut self, path: impl Into<String>) -> Self {
        self.css_overrides.push(path.into());
        self
    }

    /// Replaces the component in a theme slot.
    pub fn component(
        mut self,
        slot: impl Into<String>,
        replacement: impl Into<ComponentRef>,
    ) -> Self {
        self.component_overrides
            .push((slot.into(), replacement.into()));
        self
    }

    pub fn raw_config(&self) -> &Value {
        &self.raw_config
    }

    pub fn page_overrides(&self) -> &[(String, PageOverride)] {
        &self.page_overrides
    }

    pub fn css_overrides(&self) -> &[String] {
        &self.css_overrides
    }

    pub fn component_overrides(&self) -> &[(String, ComponentRef)] {
        &self.component_overrides
    }

    /// Parses a usage document from JSON.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a usage document from YAML.
    ///
    /// `.nan`, `.inf` and `-.inf` are rejected with
    /// [`LoadError::NonFiniteNumber`], since configuration values are JSON.
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        parse_yaml(yaml)
    }

    /// Loads a usage document from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file cannot be read, has an
    /// unrecognized extension, or does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        match read_document(path.as_ref())? {
            (DocumentFormat::Json, content) => Self::from_json(&content),
            (DocumentFormat::Yaml, content) => Self::from_yaml(&content),
        }
    }
}

/// Parses YAML into `T`, rejecting numbers JSON cannot represent.
pub(crate) fn parse_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T, LoadError> {
    let document: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    reject_non_finite(&document, "")?;
    Ok(serde_yaml::from_value(document)?)
}

fn reject_non_finite(value: &serde_yaml::Value, path: &str) -> Result<(), LoadError> {
    match value {
        serde_yaml::Value::Number(n) if n.is_nan() || n.is_infinite() => {
            Err(LoadError::NonFiniteNumber {
                path: path.to_string(),
            })
        }
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| reject_non_finite(item, &format!("{}[{}]", path, i))),
        serde_yaml::Value::Mapping(map) => map.iter().try_for_each(|(key, item)| {
            let key = match key.as_str() {
                Some(key) => key.to_string(),
                None => serde_yaml::to_string(key)?.trim_end().to_string(),
            };
            let path = if path.is_empty() {
                key
            } else {
                format!("{}.{}", path, key)
            };
            reject_non_finite(item, &path)
        }),
        serde_yaml::Value::Tagged(tagged) => reject_non_finite(&tagged.value, path),
        _ => Ok(()),
    }
}

/// On-disk shape of a usage document.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct UsageDocument {
    #[serde(default)]
    config: Value,
    #[serde(default)]
    pages: BTreeMap<String, PageOverride>,
    #[serde(default)]
    overrides: OverridesDocument,
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverridesDocument {
    #[serde(default)]
    css: Vec<String>,
    #[serde(default)]
    components: BTreeMap<String, ComponentRef>,
}

impl From<UsageDocument> for ThemeUsage {
    fn from(doc: UsageDocument) -> Self {
        Self {
            raw_config: doc.config,
            page_overrides: doc.pages.into_iter().collect(),
            css_overrides: doc.overrides.css,
            component_overrides: doc.overrides.components.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentFormat {
    Json,
    Yaml,
}

/// Reads a document, picking its format from the file extension.
pub(crate) fn read_document(path: &Path) -> Result<(DocumentFormat, String), LoadError> {
    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => DocumentFormat::Json,
        Some("yaml") | Some("yml") => DocumentFormat::Yaml,
        _ => {
            return Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((format, content))
}
