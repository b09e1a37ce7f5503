use super::resolve_discriminated_branch;
use crate::schema::OneOfSchema;
use crate::validator::validate_at;
use crate::violation::Violation;
use serde_json::Value;

pub(crate) fn validate(schema: &OneOfSchema, instance: &Value, path: &str) -> Vec<Violation> {
    match schema.branches.as_slice() {
        [] => Vec::new(),
        [branch] => validate_at(branch, instance, path),
        branches => {
            // The discriminator picks a single branch and surfaces its
            // precise nested violations instead of the coarse count below.
            if let Some(branch) = resolve_discriminated_branch(
                branches,
                schema.discriminator.as_ref(),
                instance,
                path,
            ) {
                return validate_at(branch, instance, path);
            }
            let matched = branches
                .iter()
                .filter(|branch| validate_at(branch, instance, path).is_empty())
                .count();
            if matched == 1 {
                Vec::new()
            } else {
                vec![Violation::ambiguous_one_of(path, matched)]
            }
        }
    }
}
