//! Structural validation of runtime values against OpenAPI-flavored schemas.
//!
//! The engine checks an already-parsed [`serde_json::Value`] against a
//! [`Schema`] — a JSON-Schema-like contract extended with OpenAPI's
//! `nullable` and `discriminator` — and returns a flat list of
//! [`Violation`]s. An empty list means the value conforms; a non-empty list
//! describes everything that is wrong with the payload at once.
//!
//! The schema tree must be fully dereferenced before it reaches this crate:
//! no `$ref`, no cycles. Validation itself is a pure synchronous function,
//! safe to call concurrently against a shared schema.
mod format;
mod paths;
mod schema;
mod validator;
mod validators;
mod violation;
pub use schema::{
    Additional, AllOfSchema, AnyOfSchema, ArraySchema, BooleanSchema, Dependency, Discriminator,
    Items, NumberSchema, ObjectSchema, OneOfSchema, Schema, StringSchema,
};
pub use validator::validate;
pub use violation::{Violation, ViolationKind};

#[macro_use]
extern crate lazy_static;
