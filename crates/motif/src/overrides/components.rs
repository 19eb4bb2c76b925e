//! Component slot overrides.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::MergeError;

/// A reference to a component implementation, typically a module path such
/// as `"./src/components/Heading"`.
///
/// The engine never interprets the reference; the host's rendering layer
/// resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for ComponentRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

/// Applies component overrides to the theme's default slot map.
///
/// Replacement is 1:1 by slot name. A slot the theme does not declare fails
/// the whole merge with [`MergeError::UnknownSlot`]. Slots without an
/// override keep their default, so the result always has exactly the
/// theme's slots.
pub fn merge_components(
    defaults: &BTreeMap<String, ComponentRef>,
    overrides: &[(String, ComponentRef)],
) -> Result<BTreeMap<String, ComponentRef>, MergeError> {
    let mut components = defaults.clone();
    for (slot, replacement) in overrides {
        match components.get_mut(slot) {
            Some(current) => {
                trace!(slot = %slot, component = %replacement, "replacing component");
                *current = replacement.clone();
            }
            None => return Err(MergeError::UnknownSlot { slot: slot.clone() }),
        }
    }
    Ok(components)
}
