//! Integration tests for route matching and binding.
//!
//! These exercise the full flow through the public boundary: tokenize →
//! decompose → match → bind arguments → bind options → cast.

use cmdroute::{Command, RouteError, Router, Value};

// =============================================================================
// Helpers
// =============================================================================

fn router(template: &str, tokens: &[&str]) -> Router {
    let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    Router::new(template, &tokens)
}

fn parse(template: &str, tokens: &[&str]) -> Result<Command, RouteError> {
    router(template, tokens).parse()
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn differing_command_names_never_match() {
    let r = router("deploy <env>", &["destroy", "prod"]);
    assert!(!r.is_match());

    let cmd = r.parse().unwrap();
    assert_eq!(cmd.command, None);
    assert!(cmd.argument.is_empty());
    assert!(cmd.option.is_empty());
}

#[test]
fn matching_command_binds_its_name() {
    let cmd = parse("deploy <env>", &["deploy", "prod"]).unwrap();
    assert_eq!(cmd.command.as_deref(), Some("deploy"));
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn required_and_optional_arguments_bind() {
    let cmd = parse("cmd <a> [b]", &["cmd", "x", "y"]).unwrap();
    assert_eq!(cmd.argument.get("a").map(String::as_str), Some("x"));
    assert_eq!(cmd.argument.get("b").map(String::as_str), Some("y"));
}

#[test]
fn missing_required_argument_errors() {
    let err = parse("cmd <a>", &["cmd"]).unwrap_err();
    assert_eq!(err, RouteError::MissingArgument("a".into()));
}

#[test]
fn absent_optional_argument_is_fine() {
    let cmd = parse("cmd [a]", &["cmd"]).unwrap();
    assert!(cmd.argument.is_empty());
}

#[test]
fn arguments_stay_raw_strings() {
    let cmd = parse("cmd <a>", &["cmd", "42"]).unwrap();
    assert_eq!(cmd.argument.get("a").map(String::as_str), Some("42"));
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn short_alias_resolves_to_declared_flag() {
    let cmd = parse("cmd --opt=<alias:o>", &["cmd", "-o name"]).unwrap();
    assert_eq!(cmd.option.get("opt"), Some(&Value::str("name")));
}

#[test]
fn array_option_casts_each_element() {
    let cmd = parse("cmd --opt=<type:array>", &["cmd", "--opt=1,2,3"]).unwrap();
    assert_eq!(
        cmd.option.get("opt"),
        Some(&Value::List(vec![
            Value::Num(1.0),
            Value::Num(2.0),
            Value::Num(3.0)
        ]))
    );
}

#[test]
fn default_applies_and_explicit_overrides() {
    let cmd = parse("cmd --opt=<default:5>", &["cmd"]).unwrap();
    assert_eq!(cmd.option.get("opt"), Some(&Value::Num(5.0)));

    let cmd = parse("cmd --opt=<default:5>", &["cmd", "--opt=7"]).unwrap();
    assert_eq!(cmd.option.get("opt"), Some(&Value::Num(7.0)));
}

#[test]
fn presence_flag_rejects_a_value() {
    let err = parse("cmd --opt", &["cmd", "--opt=10"]).unwrap_err();
    assert!(matches!(err, RouteError::InvalidOption { .. }));
}

#[test]
fn presence_flag_binds_true_when_given() {
    let cmd = parse("cmd --force", &["cmd", "--force"]).unwrap();
    assert_eq!(cmd.option.get("force"), Some(&Value::Bool(true)));

    let cmd = parse("cmd --force", &["cmd"]).unwrap();
    assert!(!cmd.option.contains_key("force"));
}

#[test]
fn unsupported_declared_type_errors() {
    let err = parse("cmd --opt=<type:object>", &["cmd", "--opt=7"]).unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidOption {
            option: "opt".into(),
            message: "type `object` isn't supported".into(),
        }
    );
}

#[test]
fn declared_type_mismatch_errors() {
    let err = parse("cmd --opt=<type:boolean>", &["cmd", "--opt=7"]).unwrap_err();
    assert_eq!(
        err,
        RouteError::InvalidOption {
            option: "opt".into(),
            message: "expected type boolean but received number".into(),
        }
    );
}

#[test]
fn undeclared_invocation_flags_are_ignored() {
    let cmd = parse("cmd <a>", &["cmd", "x", "--stray=1"]).unwrap();
    assert!(cmd.option.is_empty());
}

#[test]
fn placeholder_name_is_the_output_key() {
    let cmd = parse(
        "deploy <env> --retries=<tries|type:number|default:3>",
        &["deploy", "prod"],
    )
    .unwrap();
    assert_eq!(cmd.option.get("tries"), Some(&Value::Num(3.0)));
    assert!(!cmd.option.contains_key("retries"));
}

// =============================================================================
// End-to-end shape
// =============================================================================

#[test]
fn full_route_binds_everything() {
    let cmd = parse(
        "deploy <env> [region] --retries=<tries|type:number|default:3> --force --tag=<type:array>",
        &["deploy", "prod", "eu-west", "--retries=5", "--force", "--tag=a,b"],
    )
    .unwrap();

    assert_eq!(cmd.command.as_deref(), Some("deploy"));
    assert_eq!(cmd.argument.get("env").map(String::as_str), Some("prod"));
    assert_eq!(
        cmd.argument.get("region").map(String::as_str),
        Some("eu-west")
    );
    assert_eq!(cmd.option.get("tries"), Some(&Value::Num(5.0)));
    assert_eq!(cmd.option.get("force"), Some(&Value::Bool(true)));
    assert_eq!(
        cmd.option.get("tag"),
        Some(&Value::List(vec![Value::str("a"), Value::str("b")]))
    );
}

#[test]
fn quoted_invocation_values_stay_whole() {
    let cmd = parse("say <msg>", &["say", "'hello world'"]).unwrap();
    assert_eq!(
        cmd.argument.get("msg").map(String::as_str),
        Some("hello world")
    );
}

#[test]
fn result_serializes_to_natural_json() {
    let cmd = parse(
        "cmd <a> --force --name=<type:string>",
        &["cmd", "x", "--force", "--name=zed"],
    )
    .unwrap();
    let json = serde_json::to_value(&cmd).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "command": "cmd",
            "argument": {"a": "x"},
            "option": {"force": true, "name": "zed"},
        })
    );
}

#[test]
fn parse_twice_yields_equal_results() {
    let r = router("cmd <a> --opt=<default:5>", &["cmd", "x"]);
    assert_eq!(r.parse().unwrap(), r.parse().unwrap());
}
