/// Property-based tests: YAML output read back by an independent YAML parser.
///
/// Random JSON values are generated as `serde_json::Value`, serialized to
/// JSON text, converted, and parsed back with `serde_yaml`. The parsed YAML
/// must equal the original value. This checks indentation, fused sequence
/// markers and string escaping against a real YAML implementation.
///
/// Generation limits:
/// - Strings avoid U+0085, U+2028 and U+2029, which YAML treats as line
///   breaks inside quoted scalars
/// - Floats are quarters (n / 4.0), so their decimal text parses back to the
///   identical f64
use proptest::prelude::*;
use json2yaml_core::convert_str;
use serde::Deserialize;
use serde_json::{Map, Number, Value};

// ============================================================================
// Strategies for generating JSON values
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,10}",
        "[ -~]{0,12}",
        Just(String::new()),
        Just("- x".to_string()),
        Just("a: b".to_string()),
    ]
}

fn arb_json_string() -> impl Strategy<Value = String> {
    prop_oneof![
        // Printable ASCII, quotes and backslashes included
        "[ -~]{0,30}",
        Just(String::new()),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("---".to_string()),
        Just("- item".to_string()),
        Just("key: value".to_string()),
        Just("# comment".to_string()),
        Just("caf\u{00e9} \u{4f60}\u{597d} \u{1f600}".to_string()),
        Just("\u{8}\u{c}\n\r\t".to_string()),
        Just("bell\u{7} esc\u{1b} nul\u{0}".to_string()),
        Just("  padded  ".to_string()),
    ]
}

fn arb_json_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| Value::Number(Number::from(n))),
        any::<u64>().prop_map(|n| Value::Number(Number::from(n))),
        (-4_000_000i64..4_000_000i64)
            .prop_filter_map("finite", |n| Number::from_f64(n as f64 / 4.0))
            .prop_map(Value::Number),
    ]
}

fn arb_primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_json_string().prop_map(Value::String),
        arb_json_number(),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
    ]
}

/// Arbitrary JSON with empty and non-empty containers at every level.
fn arb_json_value() -> impl Strategy<Value = Value> {
    arb_primitive().prop_recursive(5, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|pairs| {
                let mut map = Map::new();
                for (k, v) in pairs {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

/// JSON number grammar, including literals no native type can hold.
fn arb_number_literal() -> impl Strategy<Value = String> {
    "-?(0|[1-9][0-9]{0,40})(\\.[0-9]{1,20})?([eE][+-]?[0-9]{1,4})?"
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse every document of a YAML stream.
fn parse_yaml_stream(yaml: &str) -> Vec<Value> {
    serde_yaml::Deserializer::from_str(yaml)
        .map(|doc| Value::deserialize(doc).expect("output must be valid YAML"))
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Core property: the YAML output describes the same data as the input.
    #[test]
    fn yaml_parses_back_to_input(value in arb_json_value()) {
        let json = serde_json::to_string(&value).unwrap();
        let yaml = convert_str(&json).unwrap();
        let docs = parse_yaml_stream(&yaml);
        prop_assert_eq!(
            docs,
            vec![value],
            "Roundtrip failed!\n  JSON: {}\n  YAML:\n{}",
            json,
            yaml
        );
    }

    /// Pretty-printed input produces the same output as compact input.
    #[test]
    fn whitespace_does_not_matter(value in arb_json_value()) {
        let compact = convert_str(&serde_json::to_string(&value).unwrap()).unwrap();
        let pretty = convert_str(&serde_json::to_string_pretty(&value).unwrap()).unwrap();
        prop_assert_eq!(compact, pretty);
    }

    /// K concatenated values give K documents joined by K - 1 separators.
    #[test]
    fn one_document_per_value(values in prop::collection::vec(arb_json_value(), 0..6)) {
        let json: String = values
            .iter()
            .map(|v| serde_json::to_string(v).unwrap())
            .collect();
        let yaml = convert_str(&json).unwrap();

        let separators = yaml.lines().filter(|line| *line == "---").count();
        prop_assert_eq!(separators, values.len().saturating_sub(1));
        prop_assert_eq!(yaml.is_empty(), values.is_empty());
        prop_assert!(yaml.is_empty() || yaml.ends_with('\n'));
        if !values.is_empty() {
            prop_assert_eq!(parse_yaml_stream(&yaml), values);
        }
    }

    /// No line ever ends with a space.
    #[test]
    fn no_trailing_spaces(value in arb_json_value()) {
        let yaml = convert_str(&serde_json::to_string(&value).unwrap()).unwrap();
        for (i, line) in yaml.lines().enumerate() {
            prop_assert!(!line.ends_with(' '), "line {} has trailing space: {:?}", i, line);
        }
    }

    /// Number literals come out byte-identical, at top level and nested.
    #[test]
    fn number_literals_are_verbatim(literal in arb_number_literal()) {
        prop_assert_eq!(convert_str(&literal).unwrap(), format!("{}\n", literal));
        let nested = format!(r#"{{"n":[{}]}}"#, literal);
        prop_assert_eq!(
            convert_str(&nested).unwrap(),
            format!("\"n\":\n  - {}\n", literal)
        );
    }

    /// Truncating a document anywhere inside a container is an EOF error.
    #[test]
    fn truncation_is_reported_as_eof(value in arb_json_value(), cut in any::<prop::sample::Index>()) {
        let json = format!("[{}]", serde_json::to_string(&value).unwrap());
        let boundaries: Vec<usize> = (1..json.len()).filter(|i| json.is_char_boundary(*i)).collect();
        let truncated = &json[..boundaries[cut.index(boundaries.len())]];
        let err = convert_str(truncated).unwrap_err();
        prop_assert!(err.to_string().contains("unexpected EOF"), "{:?}: {}", truncated, err);
    }
}
