//! Declarative predicates over a validated configuration.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::schema::ValidatedConfig;

/// Signature of a [`Predicate::Custom`] check.
pub type PredicateFn = Arc<dyn Fn(&ValidatedConfig) -> bool + Send + Sync>;

/// Decides whether a sub-integration is included in a build.
///
/// Predicates are plain data so they can be printed, compared in tests, and
/// audited without running them. [`Predicate::Custom`] exists for checks
/// that don't fit the built-in forms; it still carries a label so it shows
/// up meaningfully in logs.
///
/// Evaluation is pure: it only reads the config.
///
/// # Example
///
/// ```rust
/// use motif::Predicate;
///
/// let p = Predicate::enabled("sitemap").and(Predicate::present("site"));
/// assert_eq!(p.to_string(), "all(enabled(sitemap), present(site))");
/// ```
#[derive(Clone)]
pub enum Predicate {
    /// Always included.
    Always,
    /// Never included.
    Never,
    /// The value at the path is boolean `true`.
    Enabled(String),
    /// A value exists at the path.
    Present(String),
    /// The value at the path equals the given value.
    Equals(String, Value),
    Not(Box<Predicate>),
    /// Every inner predicate holds (true when empty).
    All(Vec<Predicate>),
    /// At least one inner predicate holds (false when empty).
    Any(Vec<Predicate>),
    /// A labelled, caller-supplied check.
    Custom { label: String, check: PredicateFn },
}

impl Predicate {
    pub fn enabled(path: impl Into<String>) -> Self {
        Predicate::Enabled(path.into())
    }

    pub fn present(path: impl Into<String>) -> Self {
        Predicate::Present(path.into())
    }

    pub fn equals(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Predicate::Equals(path.into(), value.into())
    }

    pub fn custom<F>(label: impl Into<String>, check: F) -> Self
    where
        F: Fn(&ValidatedConfig) -> bool + Send + Sync + 'static,
    {
        Predicate::Custom {
            label: label.into(),
            check: Arc::new(check),
        }
    }

    /// Negates this predicate.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// Combines with `other`; both must hold.
    pub fn and(self, other: Predicate) -> Self {
        match self {
            Predicate::All(mut all) => {
                all.push(other);
                Predicate::All(all)
            }
            first => Predicate::All(vec![first, other]),
        }
    }

    /// Combines with `other`; either may hold.
    pub fn or(self, other: Predicate) -> Self {
        match self {
            Predicate::Any(mut any) => {
                any.push(other);
                Predicate::Any(any)
            }
            first => Predicate::Any(vec![first, other]),
        }
    }

    /// Evaluates the predicate against `config`.
    pub fn evaluate(&self, config: &ValidatedConfig) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Never => false,
            Predicate::Enabled(path) => config.get_bool(path) == Some(true),
            Predicate::Present(path) => config.contains(path),
            Predicate::Equals(path, expected) => config.get(path) == Some(expected),
            Predicate::Not(inner) => !inner.evaluate(config),
            Predicate::All(all) => all.iter().all(|p| p.evaluate(config)),
            Predicate::Any(any) => any.iter().any(|p| p.evaluate(config)),
            Predicate::Custom { check, .. } => check(config),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, name: &str, items: &[Predicate]) -> fmt::Result {
            write!(f, "{}(", name)?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, ")")
        }

        match self {
            Predicate::Always => write!(f, "always"),
            Predicate::Never => write!(f, "never"),
            Predicate::Enabled(path) => write!(f, "enabled({})", path),
            Predicate::Present(path) => write!(f, "present({})", path),
            Predicate::Equals(path, value) => write!(f, "equals({}, {})", path, value),
            Predicate::Not(inner) => write!(f, "not({})", inner),
            Predicate::All(all) => list(f, "all", all),
            Predicate::Any(any) => list(f, "any", any),
            Predicate::Custom { label, .. } => write!(f, "custom({})", label),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicate({})", self)
    }
}
