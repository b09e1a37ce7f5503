use regex::Regex;

/// A schema node: a closed set of mutually exclusive shapes.
///
/// The engine receives an already-dereferenced tree — no `$ref` nodes, no
/// cycles. Schemas that declare object keywords (`required`, `properties`,
/// `patternProperties`) without an explicit type are represented as
/// `Schema::Object` by the caller.
#[derive(Debug, Clone)]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    OneOf(OneOfSchema),
    AllOf(AllOfSchema),
    AnyOf(AnyOfSchema),
    /// The empty schema; matches any value.
    Any,
}

impl Default for Schema {
    fn default() -> Self {
        Schema::Any
    }
}

#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    pub pattern: Option<Regex>,
    pub enumeration: Option<Vec<String>>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<String>,
    pub nullable: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    pub is_integer: bool,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: bool,
    pub exclusive_maximum: bool,
    pub multiple_of: Option<f64>,
    pub enumeration: Option<Vec<f64>>,
    pub nullable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BooleanSchema {
    pub nullable: bool,
}

/// `properties`, `pattern_properties` and `dependencies` are ordered:
/// pattern resolution takes the first matching entry and `required` reports
/// missing keys in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    pub properties: Vec<(String, Schema)>,
    pub required: Vec<String>,
    pub additional_properties: Additional,
    pub pattern_properties: Vec<(Regex, Schema)>,
    pub property_names: Option<Regex>,
    pub min_properties: Option<usize>,
    pub max_properties: Option<usize>,
    pub dependencies: Vec<(String, Dependency)>,
    pub nullable: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ArraySchema {
    pub items: Option<Items>,
    pub additional_items: Additional,
    pub unique_items: bool,
    pub nullable: bool,
}

#[derive(Debug, Clone)]
pub enum Items {
    /// One schema applied to every element.
    Single(Box<Schema>),
    /// Tuple mode: one schema per position.
    Tuple(Vec<Schema>),
}

/// `additionalProperties` / `additionalItems`: either a blanket permission
/// or a schema applied to the extras. Absent means allowed.
#[derive(Debug, Clone)]
pub enum Additional {
    Bool(bool),
    Schema(Box<Schema>),
}

impl Default for Additional {
    fn default() -> Self {
        Additional::Bool(true)
    }
}

/// The presence of a key either requires other keys or subjects the whole
/// object to another schema. Directions are independent; a bidirectional
/// dependency needs two entries.
#[derive(Debug, Clone)]
pub enum Dependency {
    Keys(Vec<String>),
    Schema(Box<Schema>),
}

#[derive(Debug, Clone, Default)]
pub struct OneOfSchema {
    pub branches: Vec<Schema>,
    pub discriminator: Option<Discriminator>,
}

#[derive(Debug, Clone, Default)]
pub struct AllOfSchema {
    pub branches: Vec<Schema>,
}

#[derive(Debug, Clone, Default)]
pub struct AnyOfSchema {
    pub branches: Vec<Schema>,
    pub discriminator: Option<Discriminator>,
}

/// OpenAPI discriminator: the named property selects the branch.
#[derive(Debug, Clone)]
pub struct Discriminator {
    pub property_name: String,
}
