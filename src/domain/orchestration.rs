//! Ordered orchestration document assembly.
//!
//! Documents are `serde_yaml::Mapping` values, which keep insertion order on
//! both parse and serialize. Keys are never sorted.
//!
//! Compose files are commonly read by YAML 1.1 parsers, which resolve plain
//! `yes`, `off` or `22:22` to booleans and numbers. Rendering double-quotes
//! such strings so every scalar keeps the meaning it had in its template.

use serde_yaml::{Mapping, Value};

/// Literal value of the top-level `version` key.
pub const COMPOSE_VERSION: &str = "3.7";

/// Service key for the application runtime.
pub const APP_SERVICE: &str = "app";
/// Service key for the selected database engine.
pub const DATABASE_SERVICE: &str = "database";
/// Service key for the cache engine.
pub const CACHE_SERVICE: &str = "cache";

/// Parsed service fragments ready to be assembled.
#[derive(Debug, Clone)]
pub struct ServiceFragments {
    pub app: Mapping,
    pub database: Option<Mapping>,
    pub cache: Mapping,
}

/// Parse raw template text into an ordered mapping.
///
/// Empty documents and documents whose root is not a mapping are rejected.
pub fn parse_fragment(raw: &str) -> Result<Mapping, String> {
    if raw.trim().is_empty() {
        return Err("template is empty".to_string());
    }
    serde_yaml::from_str::<Mapping>(raw).map_err(|err| err.to_string())
}

/// Assemble `version` then `services: {app, [database], cache}`.
pub fn assemble(fragments: ServiceFragments) -> Mapping {
    let mut services = Mapping::new();
    services.insert(Value::from(APP_SERVICE), Value::Mapping(fragments.app));
    if let Some(database) = fragments.database {
        services.insert(Value::from(DATABASE_SERVICE), Value::Mapping(database));
    }
    services.insert(Value::from(CACHE_SERVICE), Value::Mapping(fragments.cache));

    let mut document = Mapping::new();
    document.insert(Value::from("version"), Value::from(COMPOSE_VERSION));
    document.insert(Value::from("services"), Value::Mapping(services));
    document
}

/// Plain scalars a YAML 1.1 reader resolves to booleans.
const YAML11_BOOLEANS: [&str; 22] = [
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "true", "True", "TRUE", "false",
    "False", "FALSE", "on", "On", "ON", "off", "Off", "OFF",
];

/// Serialize a document in block style, preserving key order.
///
/// Individual scalars are emitted by `serde_yaml`, except strings that would
/// not read back as strings under YAML 1.1, which are double-quoted.
pub fn render(document: &Mapping) -> Result<String, String> {
    let mut out = String::new();
    write_mapping(&mut out, document, 0)?;
    Ok(out)
}

/// Whether a YAML 1.1 reader would resolve the plain scalar `text` to a
/// boolean or a base-60 number.
pub fn is_yaml11_non_string(text: &str) -> bool {
    YAML11_BOOLEANS.contains(&text) || is_sexagesimal(text)
}

fn write_mapping(out: &mut String, mapping: &Mapping, indent: usize) -> Result<(), String> {
    let pad = " ".repeat(indent);
    for (key, value) in mapping {
        if matches!(key, Value::Mapping(_) | Value::Sequence(_)) {
            return Err(format!("mapping keys must be scalars, found {key:?}"));
        }
        let key = scalar(key)?;

        match value {
            Value::Mapping(inner) if !inner.is_empty() => {
                out.push_str(&format!("{pad}{key}:\n"));
                write_mapping(out, inner, indent + 2)?;
            }
            Value::Sequence(items) if !items.is_empty() => {
                out.push_str(&format!("{pad}{key}:\n"));
                write_sequence(out, items, indent + 2)?;
            }
            other => out.push_str(&format!("{pad}{key}: {}\n", scalar(other)?)),
        }
    }
    Ok(())
}

fn write_sequence(out: &mut String, items: &[Value], indent: usize) -> Result<(), String> {
    let pad = " ".repeat(indent);
    for item in items {
        // Nested collections are written one level deeper, then their first
        // line's indentation is replaced by the item marker.
        let mut nested = String::new();
        match item {
            Value::Mapping(inner) if !inner.is_empty() => {
                write_mapping(&mut nested, inner, indent + 2)?;
            }
            Value::Sequence(inner) if !inner.is_empty() => {
                write_sequence(&mut nested, inner, indent + 2)?;
            }
            other => {
                out.push_str(&format!("{pad}- {}\n", scalar(other)?));
                continue;
            }
        }
        out.push_str(&pad);
        out.push_str("- ");
        out.push_str(&nested[indent + 2..]);
    }
    Ok(())
}

fn scalar(value: &Value) -> Result<String, String> {
    match value {
        Value::String(text) if text.contains('\n') || is_yaml11_non_string(text) => {
            Ok(double_quoted(text))
        }
        Value::Mapping(inner) if inner.is_empty() => Ok("{}".to_string()),
        Value::Sequence(items) if items.is_empty() => Ok("[]".to_string()),
        Value::Mapping(_) | Value::Sequence(_) => Err("expected a scalar".to_string()),
        Value::Tagged(tagged) => Err(format!("tagged value {} is not supported", tagged.tag)),
        _ => {
            let rendered = serde_yaml::to_string(value).map_err(|err| err.to_string())?;
            let rendered = rendered.trim_end_matches('\n');
            match value {
                // Long plain scalars may be folded onto several lines.
                Value::String(text) if rendered.contains('\n') => Ok(double_quoted(text)),
                _ => Ok(rendered.to_string()),
            }
        }
    }
}

fn double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// YAML 1.1 base-60 integers (`1:30`) and floats (`1:30.5`).
fn is_sexagesimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let mut parts = whole.split(':');
    let head = parts.next().unwrap_or_default();
    let head_ok = match fraction {
        Some(_) => head.starts_with(|c: char| c.is_ascii_digit()),
        None => head.starts_with(|c: char| ('1'..='9').contains(&c)),
    } && head.chars().all(|c| c.is_ascii_digit() || c == '_');

    let mut groups = 0;
    for part in parts {
        let digits_ok = part.chars().all(|c| c.is_ascii_digit());
        let value_ok = match part.as_bytes() {
            [_] => true,
            [tens, _] => *tens <= b'5',
            _ => false,
        };
        if !(digits_ok && value_ok) {
            return false;
        }
        groups += 1;
    }

    head_ok
        && groups > 0
        && fraction.is_none_or(|digits| digits.chars().all(|c| c.is_ascii_digit() || c == '_'))
}
