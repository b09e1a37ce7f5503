use crate::schema::BooleanSchema;
use crate::violation::Violation;
use serde_json::Value;

pub(crate) fn validate(_: &BooleanSchema, instance: &Value, path: &str) -> Vec<Violation> {
    if instance.is_boolean() {
        Vec::new()
    } else {
        vec![Violation::not_a_boolean(path)]
    }
}
