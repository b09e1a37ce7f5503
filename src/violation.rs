use serde_json::Value;
use std::fmt::{self, Formatter};

/// One reported mismatch between a value and a schema.
///
/// Violations are plain records: a dotted/bracketed `path` into the validated
/// value plus a kind carrying the offending constraint's parameter. They hold
/// no references back into the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    path: String,
    kind: ViolationKind,
}

/// Kinds of mismatches a validation run can report.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// The value is not a string.
    NotAString,
    /// The value is not a number.
    NotANumber,
    /// The number has a fractional part where an integer is required.
    NotAnInteger,
    /// The value is not a boolean.
    NotABoolean,
    /// The value is not an object.
    NotAnObject,
    /// The value is not an array.
    NotAnArray,
    /// The string does not match the schema's pattern.
    PatternMismatch { pattern: String },
    /// The string does not match a known named format.
    FormatMismatch { format: String },
    /// The value is not one of the enumerated options.
    NotInEnum { options: Vec<Value> },
    /// The number is not divisible by `multiple_of`.
    NotAMultipleOf { multiple_of: f64 },
    /// Number below an inclusive minimum.
    BelowMinimum { limit: f64 },
    /// Number at or below an exclusive minimum.
    AtOrBelowExclusiveMinimum { limit: f64 },
    /// Number above an inclusive maximum.
    AboveMaximum { limit: f64 },
    /// Number at or above an exclusive maximum.
    AtOrAboveExclusiveMaximum { limit: f64 },
    /// String shorter than `minLength`.
    TooShort { limit: usize },
    /// String longer than `maxLength`.
    TooLong { limit: usize },
    /// A key listed in `required` is absent.
    MissingRequiredKey,
    /// A key not allowed by the schema is present.
    UnknownKey,
    /// An array element beyond the tuple schemas is present.
    UnknownArrayItem,
    /// A key does not match the `propertyNames` pattern.
    PropertyNameMismatch { pattern: String },
    /// A present key requires other keys that are absent. Carries the full
    /// declared dependency list, not just the missing name.
    MissingDependency { dependencies: Vec<String> },
    /// Fewer keys than `minProperties`.
    TooFewProperties { limit: usize },
    /// More keys than `maxProperties`.
    TooManyProperties { limit: usize },
    /// `uniqueItems` found at least one duplicate element.
    DuplicateItems,
    /// `oneOf` matched zero branches or more than one; carries how many
    /// branches passed.
    AmbiguousOneOf { matched: usize },
    /// `anyOf` matched no branch at all.
    NoAnyOfMatch,
}

impl Violation {
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Violation {
        Violation {
            path: path.into(),
            kind,
        }
    }

    /// Locator of the offending value, e.g. `value.items[2].name`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> &ViolationKind {
        &self.kind
    }
}

/// Shortcuts for creation of specific violation kinds.
impl Violation {
    pub(crate) fn not_a_string(path: &str) -> Violation {
        Violation::new(path, ViolationKind::NotAString)
    }
    pub(crate) fn not_a_number(path: &str) -> Violation {
        Violation::new(path, ViolationKind::NotANumber)
    }
    pub(crate) fn not_an_integer(path: &str) -> Violation {
        Violation::new(path, ViolationKind::NotAnInteger)
    }
    pub(crate) fn not_a_boolean(path: &str) -> Violation {
        Violation::new(path, ViolationKind::NotABoolean)
    }
    pub(crate) fn not_an_object(path: &str) -> Violation {
        Violation::new(path, ViolationKind::NotAnObject)
    }
    pub(crate) fn not_an_array(path: &str) -> Violation {
        Violation::new(path, ViolationKind::NotAnArray)
    }
    pub(crate) fn pattern_mismatch(path: &str, pattern: &str) -> Violation {
        Violation::new(
            path,
            ViolationKind::PatternMismatch {
                pattern: pattern.to_owned(),
            },
        )
    }
    pub(crate) fn format_mismatch(path: &str, format: &str) -> Violation {
        Violation::new(
            path,
            ViolationKind::FormatMismatch {
                format: format.to_owned(),
            },
        )
    }
    pub(crate) fn not_in_enum(path: &str, options: Vec<Value>) -> Violation {
        Violation::new(path, ViolationKind::NotInEnum { options })
    }
    pub(crate) fn not_a_multiple_of(path: &str, multiple_of: f64) -> Violation {
        Violation::new(path, ViolationKind::NotAMultipleOf { multiple_of })
    }
    pub(crate) fn below_minimum(path: &str, limit: f64) -> Violation {
        Violation::new(path, ViolationKind::BelowMinimum { limit })
    }
    pub(crate) fn at_or_below_exclusive_minimum(path: &str, limit: f64) -> Violation {
        Violation::new(path, ViolationKind::AtOrBelowExclusiveMinimum { limit })
    }
    pub(crate) fn above_maximum(path: &str, limit: f64) -> Violation {
        Violation::new(path, ViolationKind::AboveMaximum { limit })
    }
    pub(crate) fn at_or_above_exclusive_maximum(path: &str, limit: f64) -> Violation {
        Violation::new(path, ViolationKind::AtOrAboveExclusiveMaximum { limit })
    }
    pub(crate) fn too_short(path: &str, limit: usize) -> Violation {
        Violation::new(path, ViolationKind::TooShort { limit })
    }
    pub(crate) fn too_long(path: &str, limit: usize) -> Violation {
        Violation::new(path, ViolationKind::TooLong { limit })
    }
    pub(crate) fn missing_required_key(path: &str) -> Violation {
        Violation::new(path, ViolationKind::MissingRequiredKey)
    }
    pub(crate) fn unknown_key(path: &str) -> Violation {
        Violation::new(path, ViolationKind::UnknownKey)
    }
    pub(crate) fn unknown_array_item(path: &str) -> Violation {
        Violation::new(path, ViolationKind::UnknownArrayItem)
    }
    pub(crate) fn property_name_mismatch(path: &str, pattern: &str) -> Violation {
        Violation::new(
            path,
            ViolationKind::PropertyNameMismatch {
                pattern: pattern.to_owned(),
            },
        )
    }
    pub(crate) fn missing_dependency(path: &str, dependencies: Vec<String>) -> Violation {
        Violation::new(path, ViolationKind::MissingDependency { dependencies })
    }
    pub(crate) fn too_few_properties(path: &str, limit: usize) -> Violation {
        Violation::new(path, ViolationKind::TooFewProperties { limit })
    }
    pub(crate) fn too_many_properties(path: &str, limit: usize) -> Violation {
        Violation::new(path, ViolationKind::TooManyProperties { limit })
    }
    pub(crate) fn duplicate_items(path: &str) -> Violation {
        Violation::new(path, ViolationKind::DuplicateItems)
    }
    pub(crate) fn ambiguous_one_of(path: &str, matched: usize) -> Violation {
        Violation::new(path, ViolationKind::AmbiguousOneOf { matched })
    }
    pub(crate) fn no_any_of_match(path: &str) -> Violation {
        Violation::new(path, ViolationKind::NoAnyOfMatch)
    }
}

/// Textual representation of violations. The wording is part of the public
/// contract; consumers assert on these strings.
impl fmt::Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::NotAString => write!(f, "\"{}\" should be a string", self.path),
            ViolationKind::NotANumber => write!(f, "\"{}\" should be a number", self.path),
            ViolationKind::NotAnInteger => write!(f, "\"{}\" should be an integer", self.path),
            ViolationKind::NotABoolean => write!(f, "\"{}\" should be a boolean", self.path),
            ViolationKind::NotAnObject => write!(f, "\"{}\" should be an object", self.path),
            ViolationKind::NotAnArray => write!(f, "\"{}\" should be an array", self.path),
            ViolationKind::PatternMismatch { pattern } => {
                write!(f, "\"{}\" should match pattern \"{}\"", self.path, pattern)
            }
            ViolationKind::FormatMismatch { format } => {
                write!(f, "\"{}\" should match format \"{}\"", self.path, format)
            }
            ViolationKind::NotInEnum { options } => {
                let options = options
                    .iter()
                    .map(|option| option.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "\"{}\" should be one of [{}]", self.path, options)
            }
            ViolationKind::NotAMultipleOf { multiple_of } => {
                write!(f, "\"{}\" should be a multiple of {}", self.path, multiple_of)
            }
            ViolationKind::BelowMinimum { limit } => write!(
                f,
                "\"{}\" should be greater than or equal to {}",
                self.path, limit
            ),
            ViolationKind::AtOrBelowExclusiveMinimum { limit } => {
                write!(f, "\"{}\" should be greater than {}", self.path, limit)
            }
            ViolationKind::AboveMaximum { limit } => write!(
                f,
                "\"{}\" should be less than or equal to {}",
                self.path, limit
            ),
            ViolationKind::AtOrAboveExclusiveMaximum { limit } => {
                write!(f, "\"{}\" should be less than {}", self.path, limit)
            }
            ViolationKind::TooShort { limit } => {
                write!(f, "\"{}\" should be at least {} characters", self.path, limit)
            }
            ViolationKind::TooLong { limit } => {
                write!(f, "\"{}\" should be at most {} characters", self.path, limit)
            }
            ViolationKind::MissingRequiredKey => write!(f, "\"{}\" key is missing", self.path),
            ViolationKind::UnknownKey => write!(f, "\"{}\" key is unknown", self.path),
            ViolationKind::UnknownArrayItem => write!(f, "\"{}\" item is unknown", self.path),
            ViolationKind::PropertyNameMismatch { pattern } => write!(
                f,
                "\"{}\" property name should match pattern \"{}\"",
                self.path, pattern
            ),
            ViolationKind::MissingDependency { dependencies } => write!(
                f,
                "\"{}\" requires keys [{}]",
                self.path,
                dependencies.join(", ")
            ),
            ViolationKind::TooFewProperties { limit } => write!(
                f,
                "\"{}\" should have at least {} properties",
                self.path, limit
            ),
            ViolationKind::TooManyProperties { limit } => write!(
                f,
                "\"{}\" should have at most {} properties",
                self.path, limit
            ),
            ViolationKind::DuplicateItems => {
                write!(f, "\"{}\" should not contain duplicate items", self.path)
            }
            ViolationKind::AmbiguousOneOf { matched } => write!(
                f,
                "\"{}\" should match exactly one schema, but matched {}",
                self.path, matched
            ),
            ViolationKind::NoAnyOfMatch => {
                write!(f, "\"{}\" should match at least one schema", self.path)
            }
        }
    }
}
