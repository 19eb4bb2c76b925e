//! Typed configuration schemas and their validator.
//!
//! A theme declares a [`Schema`]: a closed map of field name to
//! [`FieldSpec`] (kind, optional, default). Site owners supply an untyped
//! `serde_json::Value`, and [`validate`] turns it into a [`ValidatedConfig`]
//! or a [`SchemaError`](crate::SchemaError) naming the offending field path.
//!
//! Supported kinds are strings, booleans, numbers, nested objects (closed,
//! with their own defaults), and homogeneous arrays.

mod config;
mod field;
mod validate;

pub use config::ValidatedConfig;
pub use field::{FieldKind, FieldSpec, Schema};
pub use validate::validate;
pub(crate) use validate::validate_counting;
