use crate::schema::NumberSchema;
use crate::violation::Violation;
use serde_json::Value;

pub(crate) fn validate(schema: &NumberSchema, instance: &Value, path: &str) -> Vec<Violation> {
    let item = match instance {
        Value::Number(number) => number
            .as_f64()
            .expect("A JSON number will always be representable as f64"),
        _ => return vec![Violation::not_a_number(path)],
    };
    let mut violations = Vec::new();
    if schema.is_integer && item.fract() != 0. {
        violations.push(Violation::not_an_integer(path));
    }
    if let Some(options) = &schema.enumeration {
        if !options.iter().any(|option| *option == item) {
            let options = options.iter().map(|option| Value::from(*option)).collect();
            violations.push(Violation::not_in_enum(path, options));
        }
    }
    if let Some(multiple_of) = schema.multiple_of {
        if item % multiple_of != 0. {
            violations.push(Violation::not_a_multiple_of(path, multiple_of));
        }
    }
    if let Some(limit) = schema.minimum {
        if schema.exclusive_minimum {
            if item <= limit {
                violations.push(Violation::at_or_below_exclusive_minimum(path, limit));
            }
        } else if item < limit {
            violations.push(Violation::below_minimum(path, limit));
        }
    }
    if let Some(limit) = schema.maximum {
        if schema.exclusive_maximum {
            if item >= limit {
                violations.push(Violation::at_or_above_exclusive_maximum(path, limit));
            }
        } else if item > limit {
            violations.push(Violation::above_maximum(path, limit));
        }
    }
    violations
}
