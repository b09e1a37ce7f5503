use oas_validator::*;
use regex::Regex;
use serde_json::json;

fn render(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(|v| v.to_string()).collect()
}

#[test]
fn type_mismatch_message() {
    let schema = Schema::String(StringSchema::default());
    assert_eq!(
        render(&validate(&schema, &json!(123))),
        vec!["\"value\" should be a string"]
    )
}

#[test]
fn missing_required_keys_follow_declaration_order() {
    let schema = Schema::Object(ObjectSchema {
        required: vec!["test".to_owned(), "other".to_owned(), "last".to_owned()],
        ..Default::default()
    });
    assert_eq!(
        render(&validate(&schema, &json!({"test": "123"}))),
        vec![
            "\"value.other\" key is missing",
            "\"value.last\" key is missing"
        ]
    )
}

#[test]
fn tuple_array_rejects_excess_items() {
    let schema = Schema::Array(ArraySchema {
        items: Some(Items::Tuple(vec![
            Schema::Number(NumberSchema::default()),
            Schema::String(StringSchema::default()),
        ])),
        additional_items: Additional::Bool(false),
        ..Default::default()
    });
    assert_eq!(
        render(&validate(&schema, &json!([24, "Sussex", "Drive"]))),
        vec!["\"value[2]\" item is unknown"]
    )
}

#[test]
fn discriminated_one_of_reports_nested_violations() {
    let branch = |tag: &str, pattern: &str| {
        Schema::Object(ObjectSchema {
            properties: vec![
                (
                    "test".to_owned(),
                    Schema::String(StringSchema {
                        pattern: Some(Regex::new(pattern).unwrap()),
                        ..Default::default()
                    }),
                ),
                (
                    "testType".to_owned(),
                    Schema::String(StringSchema {
                        enumeration: Some(vec![tag.to_owned()]),
                        ..Default::default()
                    }),
                ),
            ],
            ..Default::default()
        })
    };
    let schema = Schema::OneOf(OneOfSchema {
        branches: vec![branch("you", r"^[a-z]+$"), branch("me", r"\d+")],
        discriminator: Some(Discriminator {
            property_name: "testType".to_owned(),
        }),
    });
    let violations = validate(&schema, &json!({"test": "AAA", "testType": "me"}));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path(), "value.test");
    assert_eq!(
        violations[0].to_string(),
        "\"value.test\" should match pattern \"\\d+\""
    )
}

#[test]
fn bidirectional_dependencies_need_two_declarations() {
    let schema = Schema::Object(ObjectSchema {
        dependencies: vec![
            (
                "credit_card".to_owned(),
                Dependency::Keys(vec!["billing_address".to_owned()]),
            ),
            (
                "billing_address".to_owned(),
                Dependency::Keys(vec!["credit_card".to_owned()]),
            ),
        ],
        ..Default::default()
    });
    let violations = validate(&schema, &json!({"name": "J", "billing_address": "x"}));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path(), "value.billing_address");
    assert_eq!(
        violations[0].kind(),
        &ViolationKind::MissingDependency {
            dependencies: vec!["credit_card".to_owned()]
        }
    )
}

#[test]
fn validation_is_deterministic() {
    let schema = Schema::Object(ObjectSchema {
        properties: vec![(
            "tags".to_owned(),
            Schema::Array(ArraySchema {
                items: Some(Items::Single(Box::new(Schema::String(
                    StringSchema::default(),
                )))),
                unique_items: true,
                ..Default::default()
            }),
        )],
        required: vec!["id".to_owned()],
        additional_properties: Additional::Bool(false),
        ..Default::default()
    });
    let instance = json!({"tags": ["a", "a", 3], "extra": true});
    let first = validate(&schema, &instance);
    let second = validate(&schema, &instance);
    assert_eq!(first, second);
    assert_eq!(render(&first), render(&second))
}

#[test]
fn nullable_typed_schema_accepts_null() {
    let schema = Schema::Object(ObjectSchema {
        required: vec!["id".to_owned()],
        nullable: true,
        ..Default::default()
    });
    assert_eq!(validate(&schema, &json!(null)), vec![])
}

#[test]
fn all_of_equals_branch_concatenation() {
    let branches = vec![
        Schema::Object(ObjectSchema {
            required: vec!["a".to_owned()],
            ..Default::default()
        }),
        Schema::Object(ObjectSchema {
            min_properties: Some(2),
            ..Default::default()
        }),
    ];
    let schema = Schema::AllOf(AllOfSchema {
        branches: branches.clone(),
    });
    let instance = json!({"b": 1});
    let combined = validate(&schema, &instance);
    let expected: Vec<Violation> = branches
        .iter()
        .flat_map(|branch| validate(branch, &instance))
        .collect();
    assert_eq!(combined, expected)
}

#[test]
fn one_of_counts_passing_branches() {
    let branches = vec![
        Schema::String(StringSchema::default()),
        Schema::Number(NumberSchema::default()),
    ];
    let schema = Schema::OneOf(OneOfSchema {
        branches,
        discriminator: None,
    });
    assert_eq!(validate(&schema, &json!("one match")), vec![]);
    let violations = validate(&schema, &json!(true));
    assert_eq!(
        violations,
        vec![Violation::new(
            "value",
            ViolationKind::AmbiguousOneOf { matched: 0 }
        )]
    )
}

#[test]
fn deep_paths_thread_through_recursion() {
    let schema = Schema::Object(ObjectSchema {
        properties: vec![(
            "foo".to_owned(),
            Schema::Array(ArraySchema {
                items: Some(Items::Single(Box::new(Schema::Object(ObjectSchema {
                    required: vec!["bar".to_owned()],
                    ..Default::default()
                })))),
                ..Default::default()
            }),
        )],
        ..Default::default()
    });
    let violations = validate(&schema, &json!({"foo": [{"bar": 1}, {}]}));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path(), "value.foo[1].bar")
}
