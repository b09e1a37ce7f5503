use crate::schema::AllOfSchema;
use crate::validator::validate_at;
use crate::violation::Violation;
use serde_json::Value;

/// Every branch runs against the same value; violations concatenate in
/// branch order with no short-circuit and no deduplication.
pub(crate) fn validate(schema: &AllOfSchema, instance: &Value, path: &str) -> Vec<Violation> {
    schema
        .branches
        .iter()
        .flat_map(|branch| validate_at(branch, instance, path))
        .collect()
}
