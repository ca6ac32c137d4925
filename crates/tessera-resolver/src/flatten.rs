//! Tree flattening.
//!
//! Walks a token document depth-first into an ordered list of
//! (flattened path, leaf) pairs. Source insertion order is preserved;
//! any display sorting is a consumer concern. Mode-bearing leaves stay
//! single entries; the generators route the light/dark pair.

use tessera_core::model::{TokenDocument, TokenGroup, TokenLeaf, TokenNode};
use tessera_core::path::join_segment;

/// One flattened token: the joined path and the leaf it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedToken {
    pub path: String,
    pub leaf: TokenLeaf,
}

/// Flatten every family of a document, in source order.
pub fn flatten_document(doc: &TokenDocument) -> Vec<FlattenedToken> {
    let mut out = Vec::new();
    for (family, group) in doc.iter() {
        flatten_group(group, family, &mut out);
    }
    out
}

/// Flatten one group under the given path prefix.
pub fn flatten_group(group: &TokenGroup, prefix: &str, out: &mut Vec<FlattenedToken>) {
    for (key, node) in &group.children {
        let path = join_segment(prefix, key);
        match node {
            TokenNode::Leaf(leaf) => out.push(FlattenedToken {
                path,
                leaf: leaf.clone(),
            }),
            TokenNode::Group(child) => flatten_group(child, &path, out),
        }
    }
}
