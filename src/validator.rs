use crate::paths;
use crate::schema::Schema;
use crate::validators;
use crate::violation::Violation;
use serde_json::Value;

/// Validate `instance` against `schema` and return every mismatch found.
///
/// An empty list means the value conforms. Violations come back in
/// depth-first order following the value's own property/index order, and are
/// not deduplicated.
///
/// ```
/// use oas_validator::{validate, Schema, StringSchema};
/// use serde_json::json;
///
/// let schema = Schema::String(StringSchema::default());
/// let violations = validate(&schema, &json!(123));
/// assert_eq!(violations[0].to_string(), "\"value\" should be a string");
/// ```
pub fn validate(schema: &Schema, instance: &Value) -> Vec<Violation> {
    validate_at(schema, instance, paths::ROOT)
}

/// Dispatch on the schema variant. `nullable` short-circuits here, and only
/// for the typed variants: composition schemas carry no `nullable` of their
/// own, so a null value reaching `oneOf`/`allOf`/`anyOf` is handed to the
/// branches as-is.
pub(crate) fn validate_at(schema: &Schema, instance: &Value, path: &str) -> Vec<Violation> {
    match schema {
        Schema::String(inner) => {
            if inner.nullable && instance.is_null() {
                return Vec::new();
            }
            validators::string::validate(inner, instance, path)
        }
        Schema::Number(inner) => {
            if inner.nullable && instance.is_null() {
                return Vec::new();
            }
            validators::number::validate(inner, instance, path)
        }
        Schema::Boolean(inner) => {
            if inner.nullable && instance.is_null() {
                return Vec::new();
            }
            validators::boolean::validate(inner, instance, path)
        }
        Schema::Object(inner) => {
            if inner.nullable && instance.is_null() {
                return Vec::new();
            }
            validators::object::validate(inner, instance, path)
        }
        Schema::Array(inner) => {
            if inner.nullable && instance.is_null() {
                return Vec::new();
            }
            validators::array::validate(inner, instance, path)
        }
        Schema::OneOf(inner) => validators::one_of::validate(inner, instance, path),
        Schema::AllOf(inner) => validators::all_of::validate(inner, instance, path),
        Schema::AnyOf(inner) => validators::any_of::validate(inner, instance, path),
        Schema::Any => Vec::new(),
    }
}
