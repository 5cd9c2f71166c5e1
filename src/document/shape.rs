//! Root-shape normalization for incoming documents.
//!
//! The extraction entry point accepts four root shapes, tried in priority
//! order:
//!
//! 1. a map of node id to a wrapper with a `document` key (the nodes-endpoint
//!    response shape) - every entry's document becomes a traversal root;
//! 2. an object with a `document` key (the file-endpoint shape) - the
//!    document's children become the roots, or the document itself when it
//!    has none, so no synthetic root element is emitted;
//! 3. an object with a bare `children` sequence - each child is a root;
//! 4. any other object - traversed as a single node.
//!
//! The chain never fails for a well-formed JSON object; at worst it produces
//! a single-element result.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::node::Node;
use crate::error::Result;

/// Accepted document root shapes, in match priority order.
///
/// The node map uses a `BTreeMap` so that traversal order over shape (1) is
/// stable across runs (sorted by node id); repeated extraction of the same
/// input must be byte-identical.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DocumentRoot {
    NodeMap(BTreeMap<String, NodeWrapper>),
    File { document: Node },
    Tree(Node),
}

/// Wrapper containing the document for one node-map entry.
#[derive(Debug, Deserialize)]
pub struct NodeWrapper {
    pub document: Node,
}

impl DocumentRoot {
    /// Flatten the root shape into the list of nodes to traverse.
    pub fn into_roots(self) -> Vec<Node> {
        match self {
            // An empty object parses as an empty node map; degrade to the
            // single-node fallback instead of producing nothing.
            DocumentRoot::NodeMap(nodes) if nodes.is_empty() => vec![Node::default()],
            DocumentRoot::NodeMap(nodes) => nodes.into_values().map(|w| w.document).collect(),
            DocumentRoot::File { document } => {
                if document.children.is_empty() {
                    vec![document]
                } else {
                    document.children
                }
            }
            DocumentRoot::Tree(node) => {
                if node.children.is_empty() {
                    vec![node]
                } else {
                    node.children
                }
            }
        }
    }
}

/// Parse a JSON value into traversal roots.
///
/// Fails only for inputs no shape can absorb (non-object scalars, arrays,
/// type-mismatched fields); any well-formed object parses.
pub fn parse_document(value: serde_json::Value) -> Result<Vec<Node>> {
    let root: DocumentRoot = serde_json::from_value(value)?;
    Ok(root.into_roots())
}
