//! CSS asset overrides.

/// Concatenates the theme's CSS list with the owner's, both in order.
///
/// CSS is append-only: owner entries never replace or remove theme entries,
/// and duplicates are kept where they occur.
pub fn concat_css(defaults: &[String], overrides: &[String]) -> Vec<String> {
    defaults.iter().chain(overrides).cloned().collect()
}
