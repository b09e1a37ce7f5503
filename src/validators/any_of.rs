use super::resolve_discriminated_branch;
use crate::schema::AnyOfSchema;
use crate::validator::validate_at;
use crate::violation::Violation;
use serde_json::Value;

pub(crate) fn validate(schema: &AnyOfSchema, instance: &Value, path: &str) -> Vec<Violation> {
    match schema.branches.as_slice() {
        [] => Vec::new(),
        [branch] => validate_at(branch, instance, path),
        branches => {
            if let Some(branch) = resolve_discriminated_branch(
                branches,
                schema.discriminator.as_ref(),
                instance,
                path,
            ) {
                return validate_at(branch, instance, path);
            }
            let any_matched = branches
                .iter()
                .any(|branch| validate_at(branch, instance, path).is_empty());
            if any_matched {
                Vec::new()
            } else {
                vec![Violation::no_any_of_match(path)]
            }
        }
    }
}
