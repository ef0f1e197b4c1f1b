//! Text formatting shared by the renderers and validator messages.

use serde_json::Value;

/// `study_hours_per_week` -> `Study Hours Per Week`.
///
/// Only the first character of each word is touched; the rest keeps its case.
pub fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_word = false;
    for c in name.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word = c.is_alphanumeric();
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// Print a number the way the browser does: `0`, `6.5`, never `0.0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}

/// Render a JSON value verbatim for display.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i.to_string();
            }
            if let Some(u) = n.as_u64() {
                return u.to_string();
            }
            n.as_f64().map(format_number).unwrap_or_else(|| n.to_string())
        }
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Parse a strict finite number from user input.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `"82.5%"` -> `82.5`, clamped to `[0, 100]`.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    parse_number(number).map(|p| p.clamp(0.0, 100.0))
}
