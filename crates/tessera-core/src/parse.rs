//! Parsing token documents from the on-disk JSON format.
//!
//! The input format marks metadata with `$`-prefixed keys: an object
//! carrying both `$type` and `$value` is a token leaf, anything else is
//! a group of named children. `$description` and `$extensions.mode` are
//! captured into the model; every other `$`-key is metadata and never
//! becomes a child.

use crate::errors::ParseError;
use crate::model::{
    ModeValues, TokenDocument, TokenGroup, TokenKind, TokenLeaf, TokenNode, TokenValue,
};
use serde_json::Value;

/// Parse a whole token document.
///
/// Top-level entries that are not objects carrying a `$type` are
/// skipped; the source format uses such entries for schema metadata.
pub fn parse_document(value: &Value) -> Result<TokenDocument, ParseError> {
    let root = value.as_object().ok_or(ParseError::RootNotObject)?;

    let mut doc = TokenDocument::new();
    for (family, node) in root {
        let Some(object) = node.as_object() else {
            continue;
        };
        if !object.contains_key("$type") {
            continue;
        }
        let group = parse_group(node, family)?;
        doc.families.insert(family.clone(), group);
    }
    Ok(doc)
}

fn parse_group(value: &Value, path: &str) -> Result<TokenGroup, ParseError> {
    let object = match value.as_object() {
        Some(object) => object,
        None => return Ok(TokenGroup::default()),
    };

    let mut group = TokenGroup {
        kind: parse_kind(object.get("$type"), path)?,
        description: parse_description(object.get("$description")),
        children: Default::default(),
    };

    for (key, child) in object {
        if key.starts_with('$') {
            continue;
        }
        let child_path = format!("{}.{}", path, key);
        let node = parse_node(child, &child_path, group.kind.as_ref())?;
        group.children.insert(key.clone(), node);
    }
    Ok(group)
}

fn parse_node(
    value: &Value,
    path: &str,
    inherited: Option<&TokenKind>,
) -> Result<TokenNode, ParseError> {
    match value.as_object() {
        Some(object) => match (object.get("$type"), object.get("$value")) {
            (Some(kind), Some(raw)) => {
                Ok(TokenNode::Leaf(parse_leaf(object, kind, raw, path)?))
            }
            _ => Ok(TokenNode::Group(parse_group(value, path)?)),
        },
        // A bare scalar inherits its group's kind. This covers groups
        // like top-level breakpoints whose children skip the leaf shape.
        None => {
            let kind = inherited.cloned().ok_or_else(|| ParseError::UntypedScalar {
                path: path.to_string(),
            })?;
            let token_value =
                serde_json::from_value(value.clone()).map_err(|source| ParseError::InvalidValue {
                    path: path.to_string(),
                    source,
                })?;
            Ok(TokenNode::Leaf(TokenLeaf {
                kind,
                value: token_value,
                description: None,
                modes: None,
            }))
        }
    }
}

fn parse_leaf(
    object: &serde_json::Map<String, Value>,
    kind: &Value,
    raw: &Value,
    path: &str,
) -> Result<TokenLeaf, ParseError> {
    let kind: TokenKind =
        serde_json::from_value(kind.clone()).map_err(|source| ParseError::InvalidKind {
            path: path.to_string(),
            source,
        })?;
    let token_value =
        serde_json::from_value(raw.clone()).map_err(|source| ParseError::InvalidValue {
            path: path.to_string(),
            source,
        })?;

    let modes = match object.get("$extensions").and_then(|e| e.get("mode")) {
        Some(mode) => Some(serde_json::from_value::<ModeValues>(mode.clone()).map_err(
            |source| ParseError::InvalidModeValues {
                path: path.to_string(),
                source,
            },
        )?),
        None => None,
    };

    Ok(TokenLeaf {
        kind,
        value: token_value,
        description: parse_description(object.get("$description")),
        modes,
    })
}

fn parse_kind(value: Option<&Value>, path: &str) -> Result<Option<TokenKind>, ParseError> {
    match value {
        Some(v) => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|source| ParseError::InvalidKind {
                path: path.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

fn parse_description(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}
