pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod array;
pub(crate) mod boolean;
pub(crate) mod number;
pub(crate) mod object;
pub(crate) mod one_of;
pub(crate) mod string;

use crate::schema::{Discriminator, Schema};
use crate::validator::validate_at;
use crate::paths;
use serde_json::Value;

/// Resolve a discriminated union branch.
///
/// Applicable when a discriminator is configured and the instance is an
/// object carrying the discriminator property. The first object-typed branch
/// whose `properties` entry for that key accepts the runtime tag value wins.
/// `None` means the caller falls back to exhaustive branch testing.
pub(super) fn resolve_discriminated_branch<'a>(
    branches: &'a [Schema],
    discriminator: Option<&Discriminator>,
    instance: &Value,
    path: &str,
) -> Option<&'a Schema> {
    let discriminator = discriminator?;
    let tag = instance.as_object()?.get(&discriminator.property_name)?;
    let tag_path = paths::join_key(path, &discriminator.property_name);
    branches.iter().find(|branch| {
        if let Schema::Object(object) = branch {
            if let Some((_, subschema)) = object
                .properties
                .iter()
                .find(|(name, _)| name == &discriminator.property_name)
            {
                return validate_at(subschema, tag, &tag_path).is_empty();
            }
        }
        false
    })
}
