//! Pairwise spacing relationships between positioned elements.

use crate::config::Config;
use crate::types::{Element, Position, SpacingKind, SpacingRelationship};

/// Compute adjacency relationships for every `(i, j)` pair, `i < j` in
/// element-index order, of elements with a recorded position.
///
/// `horizontal` is the gap between the first element's right edge and the
/// second's left edge; `vertical` between bottom and top edges. A pair is
/// emitted when either gap is under the proximity threshold. `from`/`to`
/// follow index order, not spatial order, so relationships are not symmetric
/// under swapping.
pub fn spacing_relationships(elements: &[Element], config: &Config) -> Vec<SpacingRelationship> {
    let positioned: Vec<(&str, &Position)> = elements
        .iter()
        .filter_map(|e| e.properties.position.as_ref().map(|p| (e.id.as_str(), p)))
        .collect();

    let mut relationships = Vec::new();
    for i in 0..positioned.len() {
        for j in (i + 1)..positioned.len() {
            let (from, first) = positioned[i];
            let (to, second) = positioned[j];

            let horizontal = (second.x - (first.x + first.width)).abs();
            let vertical = (second.y - (first.y + first.height)).abs();

            if (horizontal as f64) < config.spacing_threshold
                || (vertical as f64) < config.spacing_threshold
            {
                let kind = if horizontal < vertical {
                    SpacingKind::Horizontal
                } else {
                    SpacingKind::Vertical
                };
                relationships.push(SpacingRelationship {
                    from: from.to_string(),
                    to: to.to_string(),
                    horizontal,
                    vertical,
                    kind,
                });
            }
        }
    }

    relationships
}
