//! `{fieldName}` placeholder substitution over configuration documents.

use serde_json::{Map, Value};

/// Replace `{name}` tokens in every string leaf with the top-level field
/// `name` from `context`. Unknown or blank fields leave the token verbatim.
pub fn substitute(value: &Value, context: &Map<String, Value>) -> Value {
    match value {
        Value::String(text) => Value::String(substitute_str(text, context)),
        Value::Array(items) => Value::Array(items.iter().map(|v| substitute(v, context)).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| (k.clone(), substitute(v, context)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Single pass: replacement text is never rescanned.
pub fn substitute_str(text: &str, context: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let name_len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();

        if name_len > 0 && after.as_bytes().get(name_len) == Some(&b'}') {
            let name = &after[..name_len];
            match lookup(context, name) {
                Some(replacement) => out.push_str(&replacement),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
            rest = &after[name_len + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

fn lookup(context: &Map<String, Value>, name: &str) -> Option<String> {
    match context.get(name)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                (i != 0).then(|| i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().filter(|f| *f != 0.0).map(|f| f.to_string())
            }
        }
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
