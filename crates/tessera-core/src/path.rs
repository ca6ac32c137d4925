//! Path naming rules shared by every generator.
//!
//! Flattened paths join tree keys with `-`, preserving source casing;
//! CSS variable names additionally kebab-case camelCase runs. Two keys
//! are special: `default`/`DEFAULT` collapses into the parent path, and
//! alpha-channel color keys (`A1`..`A12`) lowercase in place so that
//! `colors.blue.A1` becomes `colors-blue-a1` rather than `colors-blue--a1`.

/// True for alpha-channel color keys: `A` followed by one or more digits.
pub fn is_alpha_key(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next() == Some('A') && {
        let rest = chars.as_str();
        !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
    }
}

/// True for keys that collapse into the parent path.
pub fn is_default_key(segment: &str) -> bool {
    segment == "default" || segment == "DEFAULT"
}

/// Extend a flattened path with one tree key, applying the special key
/// rules.
pub fn join_segment(prefix: &str, key: &str) -> String {
    if is_default_key(key) {
        return prefix.to_string();
    }
    let segment = if is_alpha_key(key) {
        key.to_ascii_lowercase()
    } else {
        key.to_string()
    };
    if prefix.is_empty() {
        segment
    } else {
        format!("{}-{}", prefix, segment)
    }
}

/// Kebab-case a flattened path for use as a CSS variable name: every
/// ASCII uppercase letter becomes `-` plus its lowercase form.
pub fn css_var_name(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Map a dotted reference path (the text between braces) to a CSS
/// variable expression: `colors.blue.A1` -> `var(--colors-blue-a1)`.
pub fn reference_to_css_var(path: &str) -> String {
    let segments: Vec<String> = path
        .split('.')
        .map(|segment| {
            if is_alpha_key(segment) {
                segment.to_ascii_lowercase()
            } else {
                css_var_name(segment)
            }
        })
        .collect();
    format!("var(--{})", segments.join("-"))
}

/// Replace every `{dotted.path}` occurrence in `value`, leaving the
/// surrounding text untouched. An unterminated brace passes through
/// verbatim.
pub fn substitute_references<F>(value: &str, mut replace: F) -> String
where
    F: FnMut(&str) -> String,
{
    // Infallible shim over the fallible walker.
    let result: Result<String, std::convert::Infallible> =
        try_substitute_references(value, |path| Ok(replace(path)));
    match result {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

/// Fallible variant of [`substitute_references`]; the first replacement
/// error aborts the substitution.
pub fn try_substitute_references<F, E>(value: &str, mut replace: F) -> Result<String, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) => {
                out.push_str(&replace(&tail[1..end])?);
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                return Ok(out);
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}
