//! Loose typing over namespaced key/value config variables
//!
//! Values arrive either from seeded TOML (numbers, booleans) or from form
//! posts (strings), so readers accept both representations.

use std::collections::HashMap;

use serde_json::Value;

pub type Vars = HashMap<String, Value>;

pub fn get_i64(vars: &Vars, key: &str) -> Option<i64> {
    match vars.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

pub fn get_bool(vars: &Vars, key: &str) -> Option<bool> {
    match vars.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => Some(parse_flag(s)),
        _ => None,
    }
}

pub fn get_string(vars: &Vars, key: &str) -> Option<String> {
    match vars.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Checkbox-style flag: `1`, `true`, `on`, `yes` are set.
pub fn parse_flag(s: &str) -> bool {
    matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_numbers_and_strings() {
        let mut vars = Vars::new();
        vars.insert("a".into(), json!(10));
        vars.insert("b".into(), json!(" 12 "));
        vars.insert("c".into(), json!("on"));
        vars.insert("d".into(), json!(0));

        assert_eq!(get_i64(&vars, "a"), Some(10));
        assert_eq!(get_i64(&vars, "b"), Some(12));
        assert_eq!(get_bool(&vars, "c"), Some(true));
        assert_eq!(get_bool(&vars, "d"), Some(false));
        assert_eq!(get_i64(&vars, "missing"), None);
    }
}
