//! Design-tool export generation.
//!
//! Produces one JSON document per mode: a full re-nesting of the
//! semantic token tree where every leaf holds exactly the value for
//! that mode, with all references resolved literally against the base
//! token tree. No `$extensions`, no mode wrappers: external design
//! tools consume one flat single-mode tree per file.

use serde_json::{Map, Value};
use tessera_core::errors::ResolveError;
use tessera_core::model::{Mode, TokenDocument, TokenGroup, TokenNode};
use tessera_resolver::literal::LiteralResolver;

/// Generate the snapshot document for one mode.
pub fn generate(
    semantic: &TokenDocument,
    base: &TokenDocument,
    mode: Mode,
) -> Result<Value, ResolveError> {
    let mut resolver = LiteralResolver::new(base);
    let mut out = Map::new();
    for (family, group) in semantic.iter() {
        out.insert(family.clone(), snapshot_group(group, &mut resolver, mode)?);
    }
    Ok(Value::Object(out))
}

fn snapshot_group(
    group: &TokenGroup,
    resolver: &mut LiteralResolver<'_>,
    mode: Mode,
) -> Result<Value, ResolveError> {
    let mut out = Map::new();
    if let Some(kind) = &group.kind {
        out.insert("$type".to_string(), Value::String(kind.as_str().to_string()));
    }

    for (key, node) in &group.children {
        let value = match node {
            TokenNode::Group(child) => snapshot_group(child, resolver, mode)?,
            TokenNode::Leaf(leaf) => {
                let raw = match &leaf.modes {
                    Some(modes) => modes.get(mode),
                    None => &leaf.value,
                };

                let mut entry = Map::new();
                entry.insert(
                    "$type".to_string(),
                    Value::String(leaf.kind.as_str().to_string()),
                );
                entry.insert("$value".to_string(), resolver.resolve(raw)?);
                if let Some(description) = &leaf.description {
                    entry.insert(
                        "$description".to_string(),
                        Value::String(description.clone()),
                    );
                }
                Value::Object(entry)
            }
        };
        out.insert(key.clone(), value);
    }
    Ok(Value::Object(out))
}
