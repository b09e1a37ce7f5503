use crate::paths;
use crate::schema::{Additional, Dependency, ObjectSchema, Schema};
use crate::validator::validate_at;
use crate::violation::Violation;
use serde_json::Value;

pub(crate) fn validate(schema: &ObjectSchema, instance: &Value, path: &str) -> Vec<Violation> {
    let item = match instance.as_object() {
        Some(item) => item,
        None => return vec![Violation::not_an_object(path)],
    };
    let mut violations = Vec::new();
    for (key, value) in item {
        let key_path = paths::join_key(path, key);
        if let Some(pattern) = &schema.property_names {
            if !pattern.is_match(key) {
                violations.push(Violation::property_name_mismatch(&key_path, pattern.as_str()));
            }
        }
        match resolve_subschema(schema, key) {
            Some(subschema) => violations.extend(validate_at(subschema, value, &key_path)),
            None => {
                if let Additional::Bool(false) = schema.additional_properties {
                    violations.push(Violation::unknown_key(&key_path));
                }
            }
        }
        if let Some((_, dependency)) = schema.dependencies.iter().find(|(name, _)| name == key) {
            match dependency {
                Dependency::Keys(names) => {
                    for name in names {
                        if !item.contains_key(name) {
                            violations
                                .push(Violation::missing_dependency(&key_path, names.clone()));
                        }
                    }
                }
                // A schema dependency constrains the whole object, not the
                // one key that triggered it.
                Dependency::Schema(subschema) => {
                    violations.extend(validate_at(subschema, instance, path))
                }
            }
        }
    }
    if let Some(limit) = schema.min_properties {
        if item.len() < limit {
            violations.push(Violation::too_few_properties(path, limit));
        }
    }
    if let Some(limit) = schema.max_properties {
        if item.len() > limit {
            violations.push(Violation::too_many_properties(path, limit));
        }
    }
    for name in &schema.required {
        if !item.contains_key(name) {
            violations.push(Violation::missing_required_key(&paths::join_key(path, name)));
        }
    }
    violations
}

/// Named properties win over pattern properties (first declared match), which
/// win over a schema-valued `additionalProperties`.
fn resolve_subschema<'a>(schema: &'a ObjectSchema, key: &str) -> Option<&'a Schema> {
    schema
        .properties
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, subschema)| subschema)
        .or_else(|| {
            schema
                .pattern_properties
                .iter()
                .find(|(pattern, _)| pattern.is_match(key))
                .map(|(_, subschema)| subschema)
        })
        .or_else(|| match &schema.additional_properties {
            Additional::Schema(subschema) => Some(subschema.as_ref()),
            Additional::Bool(_) => None,
        })
}
