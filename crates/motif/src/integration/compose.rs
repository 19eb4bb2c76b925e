use tracing::{debug, trace};

use super::{Integration, SubIntegration};
use crate::error::IntegrationError;
use crate::schema::ValidatedConfig;

/// Materializes the sub-integrations whose predicates pass, in declaration
/// order.
///
/// Sub-integrations whose predicate fails are skipped silently and their
/// factories never run. The first factory error aborts composition; no
/// partial list is returned.
pub fn compose(
    sub_integrations: &[SubIntegration],
    config: &ValidatedConfig,
) -> Result<Vec<Integration>, IntegrationError> {
    let mut composed = Vec::new();
    for sub in sub_integrations {
        if !sub.is_enabled(config) {
            trace!(integration = sub.name(), predicate = %sub.predicate(), "skipping integration");
            continue;
        }
        let integration = sub
            .materialize(config)
            .map_err(|source| IntegrationError {
                integration: sub.name().to_string(),
                source,
            })?;
        trace!(integration = sub.name(), "included integration");
        composed.push(integration);
    }
    debug!(
        declared = sub_integrations.len(),
        included = composed.len(),
        "composed integrations"
    );
    Ok(composed)
}
