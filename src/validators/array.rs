use crate::paths;
use crate::schema::{Additional, ArraySchema, Items};
use crate::validator::validate_at;
use crate::violation::Violation;
use serde_json::Value;
use std::collections::{hash_map::DefaultHasher, HashSet};
use std::hash::{Hash, Hasher};

pub(crate) fn validate(schema: &ArraySchema, instance: &Value, path: &str) -> Vec<Violation> {
    let items = match instance.as_array() {
        Some(items) => items,
        None => return vec![Violation::not_an_array(path)],
    };
    let mut violations = Vec::new();
    match &schema.items {
        Some(Items::Single(subschema)) => {
            for (index, element) in items.iter().enumerate() {
                violations.extend(validate_at(
                    subschema,
                    element,
                    &paths::join_index(path, index),
                ));
            }
        }
        Some(Items::Tuple(subschemas)) => {
            for (index, element) in items.iter().enumerate() {
                let element_path = paths::join_index(path, index);
                match subschemas.get(index) {
                    Some(subschema) => {
                        violations.extend(validate_at(subschema, element, &element_path))
                    }
                    None => match &schema.additional_items {
                        Additional::Schema(subschema) => {
                            violations.extend(validate_at(subschema, element, &element_path))
                        }
                        Additional::Bool(false) => {
                            violations.push(Violation::unknown_array_item(&element_path))
                        }
                        Additional::Bool(true) => {}
                    },
                }
            }
        }
        None => {}
    }
    if schema.unique_items && !is_unique(items) {
        violations.push(Violation::duplicate_items(path));
    }
    violations
}

// Based on implementation proposed by Sven Marnach:
// https://stackoverflow.com/questions/60882381/what-is-the-fastest-correct-way-to-detect-that-there-are-no-duplicates-in-a-json
#[derive(PartialEq)]
struct HashedValue<'a>(&'a Value);

impl Eq for HashedValue<'_> {}

impl Hash for HashedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.0 {
            Value::Null => state.write_u32(3_221_225_473), // chosen randomly
            Value::Bool(item) => item.hash(state),
            Value::Number(item) => {
                if let Some(number) = item.as_u64() {
                    number.hash(state);
                } else if let Some(number) = item.as_i64() {
                    number.hash(state);
                } else if let Some(number) = item.as_f64() {
                    number.to_bits().hash(state)
                }
            }
            Value::String(item) => item.hash(state),
            Value::Array(items) => {
                for item in items {
                    HashedValue(item).hash(state);
                }
            }
            Value::Object(items) => {
                let mut hash = 0;
                for (key, value) in items {
                    // We have no way of building a new hasher of type `H`, so
                    // we hardcode using the default hasher of a hash map.
                    let mut item_hasher = DefaultHasher::default();
                    key.hash(&mut item_hasher);
                    HashedValue(value).hash(&mut item_hasher);
                    hash ^= item_hasher.finish();
                }
                state.write_u64(hash);
            }
        }
    }
}

fn is_unique(items: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().map(HashedValue).all(move |x| seen.insert(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NumberSchema, Schema, StringSchema};
    use serde_json::json;

    fn number_schema() -> Schema {
        Schema::Number(NumberSchema::default())
    }

    fn string_schema() -> Schema {
        Schema::String(StringSchema::default())
    }

    #[test]
    fn non_array_stops_early() {
        let schema = ArraySchema::default();
        let violations = validate(&schema, &json!({}), "value");
        assert_eq!(violations, vec![Violation::not_an_array("value")])
    }

    #[test]
    fn single_item_schema_applies_to_every_element() {
        let schema = ArraySchema {
            items: Some(Items::Single(Box::new(number_schema()))),
            ..Default::default()
        };
        let violations = validate(&schema, &json!([1, "x", 3, "y"]), "value");
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].path(), "value[1]");
        assert_eq!(violations[1].path(), "value[3]")
    }

    #[test]
    fn tuple_mode_with_additional_items_forbidden() {
        let schema = ArraySchema {
            items: Some(Items::Tuple(vec![number_schema(), string_schema()])),
            additional_items: Additional::Bool(false),
            ..Default::default()
        };
        let violations = validate(&schema, &json!([24, "Sussex", "Drive"]), "value");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].to_string(), "\"value[2]\" item is unknown")
    }

    #[test]
    fn tuple_mode_with_additional_items_allowed() {
        let schema = ArraySchema {
            items: Some(Items::Tuple(vec![number_schema()])),
            ..Default::default()
        };
        assert!(validate(&schema, &json!([1, "anything", null]), "value").is_empty())
    }

    #[test]
    fn tuple_mode_with_additional_items_schema() {
        let schema = ArraySchema {
            items: Some(Items::Tuple(vec![number_schema()])),
            additional_items: Additional::Schema(Box::new(string_schema())),
            ..Default::default()
        };
        let violations = validate(&schema, &json!([1, "ok", 3]), "value");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path(), "value[2]")
    }

    #[test]
    fn unique_items_uses_structural_equality() {
        // Composite elements are compared by structure, not identity.
        let schema = ArraySchema {
            unique_items: true,
            ..Default::default()
        };
        let violations = validate(&schema, &json!([{"a": 1}, {"a": 1}]), "value");
        assert_eq!(violations, vec![Violation::duplicate_items("value")]);
        assert!(validate(&schema, &json!([{"a": 1}, {"a": 2}]), "value").is_empty())
    }

    #[test]
    fn duplicates_reported_once() {
        let schema = ArraySchema {
            unique_items: true,
            ..Default::default()
        };
        assert_eq!(validate(&schema, &json!([1, 1, 2, 2]), "value").len(), 1)
    }
}
