//! Theme-config generation.
//!
//! Re-nests the token hierarchy into the shape the styling preset
//! imports: `{ tokens, semanticTokens }` with `{ value, description? }`
//! leaves. References stay in brace syntax (the preset resolves them
//! itself), shadows and font stacks serialize to their CSS strings, and
//! mode pairs become `{ base, _dark }` overrides.

use serde_json::{Map, Value};
use tessera_core::errors::ExportError;
use tessera_core::model::{TokenDocument, TokenGroup, TokenKind, TokenLeaf, TokenNode, TokenValue};
use tessera_resolver::resolve::{shadow_to_css, shadows_to_css, Target};

/// Generate the theme-config document.
pub fn generate(base: &TokenDocument, semantic: &TokenDocument) -> Result<Value, ExportError> {
    let mut root = Map::new();
    root.insert("tokens".to_string(), transform(base, false)?);
    root.insert("semanticTokens".to_string(), transform(semantic, true)?);
    Ok(Value::Object(root))
}

fn transform(doc: &TokenDocument, semantic: bool) -> Result<Value, ExportError> {
    let mut out = Map::new();
    for (family, group) in doc.iter() {
        out.insert(family.clone(), transform_group(group, semantic)?);
    }
    Ok(Value::Object(out))
}

fn transform_group(group: &TokenGroup, semantic: bool) -> Result<Value, ExportError> {
    let mut out = Map::new();
    for (key, node) in &group.children {
        match node {
            TokenNode::Group(child) => {
                out.insert(key.clone(), transform_group(child, semantic)?);
            }
            TokenNode::Leaf(leaf) => {
                let key = if semantic && key.eq_ignore_ascii_case("default") {
                    // The preset spells the parent-path token DEFAULT.
                    "DEFAULT".to_string()
                } else {
                    key.clone()
                };
                out.insert(key, transform_leaf(leaf, semantic)?);
            }
        }
    }
    Ok(Value::Object(out))
}

fn transform_leaf(leaf: &TokenLeaf, semantic: bool) -> Result<Value, ExportError> {
    // Breakpoints assign their raw value with no wrapper; the preset
    // consumes them directly.
    if !semantic && leaf.kind == TokenKind::Breakpoint {
        return config_value(&leaf.value);
    }

    let value = match (&leaf.modes, semantic) {
        (Some(modes), true) => {
            let mut pair = Map::new();
            pair.insert("base".to_string(), config_value(&modes.light)?);
            pair.insert("_dark".to_string(), config_value(&modes.dark)?);
            Value::Object(pair)
        }
        _ => config_value(&leaf.value)?,
    };

    let mut entry = Map::new();
    entry.insert("value".to_string(), value);
    if let Some(description) = &leaf.description {
        entry.insert(
            "description".to_string(),
            Value::String(description.clone()),
        );
    }
    Ok(Value::Object(entry))
}

/// A value in config form: references untouched, composites serialized.
fn config_value(value: &TokenValue) -> Result<Value, ExportError> {
    match value {
        TokenValue::Number(n) => Ok(Value::from(*n)),
        TokenValue::Text(s) => Ok(Value::String(s.clone())),
        TokenValue::Shadow(layer) => Ok(Value::String(shadow_to_css(layer, Target::Config))),
        TokenValue::Shadows(layers) => Ok(Value::String(shadows_to_css(layers, Target::Config))),
        TokenValue::FontStack(families) => Ok(Value::String(families.join(", "))),
        TokenValue::TextStyle(style) => Ok(serde_json::to_value(style)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessera_core::parse_document;

    fn parse(value: serde_json::Value) -> TokenDocument {
        parse_document(&value).unwrap()
    }

    #[test]
    fn test_leaves_become_value_description_pairs() {
        let base = parse(json!({
            "colors": {
                "$type": "color",
                "blue": {
                    "5": {
                        "$type": "color",
                        "$value": "#1e40af",
                        "$description": "Primary brand blue"
                    }
                }
            }
        }));
        let out = generate(&base, &TokenDocument::new()).unwrap();
        assert_eq!(
            out["tokens"]["colors"]["blue"]["5"],
            json!({ "value": "#1e40af", "description": "Primary brand blue" })
        );
    }

    #[test]
    fn test_references_pass_through_untouched() {
        let semantic = parse(json!({
            "colors": {
                "$type": "color",
                "accent": { "$type": "color", "$value": "{colors.blue.5}" }
            }
        }));
        let out = generate(&TokenDocument::new(), &semantic).unwrap();
        assert_eq!(
            out["semanticTokens"]["colors"]["accent"]["value"],
            json!("{colors.blue.5}")
        );
    }

    #[test]
    fn test_mode_pair_becomes_base_and_dark_override() {
        let semantic = parse(json!({
            "colors": {
                "$type": "color",
                "accent": {
                    "$type": "color",
                    "$value": "{colors.blue.5}",
                    "$extensions": {
                        "mode": { "light": "{colors.blue.1}", "dark": "{colors.blue.9}" }
                    }
                }
            }
        }));
        let out = generate(&TokenDocument::new(), &semantic).unwrap();
        assert_eq!(
            out["semanticTokens"]["colors"]["accent"]["value"],
            json!({ "base": "{colors.blue.1}", "_dark": "{colors.blue.9}" })
        );
    }

    #[test]
    fn test_mode_pair_applies_to_every_kind_in_config() {
        // Unlike the CSS target, the config keeps the dark override for
        // non-color kinds too.
        let semantic = parse(json!({
            "shadows": {
                "$type": "shadow",
                "card": {
                    "$type": "shadow",
                    "$value": "{shadows.sm}",
                    "$extensions": {
                        "mode": { "light": "{shadows.sm}", "dark": "{shadows.lg}" }
                    }
                }
            }
        }));
        let out = generate(&TokenDocument::new(), &semantic).unwrap();
        assert_eq!(
            out["semanticTokens"]["shadows"]["card"]["value"],
            json!({ "base": "{shadows.sm}", "_dark": "{shadows.lg}" })
        );
    }

    #[test]
    fn test_default_key_spelled_upper_case() {
        let semantic = parse(json!({
            "colors": {
                "$type": "color",
                "accent": {
                    "default": { "$type": "color", "$value": "{colors.blue.5}" }
                }
            }
        }));
        let out = generate(&TokenDocument::new(), &semantic).unwrap();
        assert!(out["semanticTokens"]["colors"]["accent"]
            .get("DEFAULT")
            .is_some());
        assert!(out["semanticTokens"]["colors"]["accent"]
            .get("default")
            .is_none());
    }

    #[test]
    fn test_breakpoints_assign_raw_values() {
        let base = parse(json!({
            "breakpoints": {
                "$type": "breakpoint",
                "sm": "640px"
            }
        }));
        let out = generate(&base, &TokenDocument::new()).unwrap();
        assert_eq!(out["tokens"]["breakpoints"]["sm"], json!("640px"));
    }

    #[test]
    fn test_shadow_serializes_to_css_string_with_literal_references() {
        let base = parse(json!({
            "shadows": {
                "$type": "shadow",
                "sm": {
                    "$type": "shadow",
                    "$value": {
                        "offsetX": "0px",
                        "offsetY": "4px",
                        "blurRadius": "6px",
                        "spreadRadius": "0px",
                        "color": "{colors.shadow}"
                    }
                }
            }
        }));
        let out = generate(&base, &TokenDocument::new()).unwrap();
        assert_eq!(
            out["tokens"]["shadows"]["sm"]["value"],
            json!("0px 4px 6px 0px {colors.shadow}")
        );
    }

    #[test]
    fn test_font_stack_joins() {
        let base = parse(json!({
            "fonts": {
                "$type": "fontFamily",
                "body": { "$type": "fontFamily", "$value": ["Inter", "sans-serif"] }
            }
        }));
        let out = generate(&base, &TokenDocument::new()).unwrap();
        assert_eq!(out["tokens"]["fonts"]["body"]["value"], json!("Inter, sans-serif"));
    }
}
