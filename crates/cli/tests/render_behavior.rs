use collscope_cli::render_text;
use collscope_core::{AnalysisEngine, AnalysisUnit, CollscopeConfig, UnitReport};

fn report(json: &str) -> UnitReport {
    let unit = AnalysisUnit::from_json(json).unwrap();
    AnalysisEngine::new(CollscopeConfig::default()).analyze_unit(&unit)
}

const NEGATED: &str = r#"{
    "name": "Users",
    "statements": [
        {
            "kind": "prefix",
            "op": "not",
            "operand": {
                "kind": "call",
                "receiver": { "kind": "name", "name": "users" },
                "method": "isEmpty",
                "declaring_type": "org.eclipse.collections.api.set.MutableSet"
            }
        }
    ]
}"#;

#[test]
fn test_plain_text_lists_findings_with_source_line() {
    let text = render_text(&[report(NEGATED)], false, false);
    assert_eq!(
        text,
        "Users:0 warning [prefer-not-empty] Should use notEmpty() instead of negated isEmpty()\n\
         \x20   | !users.isEmpty();\n\
         1 finding(s) in 1 unit(s)\n"
    );
}

#[test]
fn test_show_fixes_prints_the_rewritten_line() {
    let text = render_text(&[report(NEGATED)], true, false);
    assert!(text.contains("    = Use notEmpty: users.notEmpty();\n"));
}

#[test]
fn test_clean_units_only_print_the_summary() {
    let clean = report(r#"{ "name": "Empty", "statements": [] }"#);
    assert!(clean.is_clean());
    assert_eq!(
        render_text(&[clean], true, false),
        "0 finding(s) in 1 unit(s)\n"
    );
}
