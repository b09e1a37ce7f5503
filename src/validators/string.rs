use crate::format;
use crate::schema::StringSchema;
use crate::violation::Violation;
use serde_json::Value;

pub(crate) fn validate(schema: &StringSchema, instance: &Value, path: &str) -> Vec<Violation> {
    let item = match instance.as_str() {
        Some(item) => item,
        None => return vec![Violation::not_a_string(path)],
    };
    let mut violations = Vec::new();
    if let Some(pattern) = &schema.pattern {
        if !pattern.is_match(item) {
            violations.push(Violation::pattern_mismatch(path, pattern.as_str()));
        }
    }
    if let Some(name) = &schema.format {
        if format::check(name, item) == Some(false) {
            violations.push(Violation::format_mismatch(path, name));
        }
    }
    if let Some(options) = &schema.enumeration {
        if !options.iter().any(|option| option == item) {
            let options = options
                .iter()
                .map(|option| Value::from(option.clone()))
                .collect();
            violations.push(Violation::not_in_enum(path, options));
        }
    }
    if let Some(limit) = schema.min_length {
        if item.chars().count() < limit {
            violations.push(Violation::too_short(path, limit));
        }
    }
    if let Some(limit) = schema.max_length {
        if item.chars().count() > limit {
            violations.push(Violation::too_long(path, limit));
        }
    }
    violations
}
