//! Tests for single-field validation and state.

use std::sync::Arc;

use formwork::field::{AssignmentError, Checkbox, Field, NumberInput, Switch, TextInput};
use formwork::form::Form;
use formwork::render::LineRenderer;
use formwork::validation::{ViolationSet, rules, sync_validator};
use serde_json::json;
use tokio::sync::broadcast::error::TryRecvError;

fn renderer() -> Arc<LineRenderer> {
    Arc::new(LineRenderer::new())
}

fn numeric_only() -> formwork::validation::Validator {
    sync_validator(|value| match value.as_str() {
        Some(s) if s.trim().parse::<f64>().is_err() => ViolationSet::single("must be a number"),
        _ => ViolationSet::empty(),
    })
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_field_holds_cleared_value() {
    let renderer = renderer();
    assert_eq!(Field::new("name", TextInput::new(), renderer.clone()).value(), json!(""));
    assert_eq!(Field::new("age", NumberInput::new(), renderer.clone()).value(), json!(null));
    assert_eq!(Field::new("terms", Switch::new(), renderer).value(), json!(false));
}

#[test]
fn test_builder_sets_properties() {
    let field = Field::new("name", TextInput::new(), renderer())
        .with_label("Name")
        .with_annotation("As on your passport")
        .with_validator(rules::required("required"))
        .with_no_submit();
    assert_eq!(field.name(), "name");
    assert_eq!(field.label(), "Name");
    assert_eq!(field.annotation(), "As on your passport");
    assert!(field.has_validator());
    assert!(field.no_submit());
}

// ============================================================================
// check_validity
// ============================================================================

#[tokio::test]
async fn test_check_validity_without_validator_is_valid() {
    let field = Field::new("name", TextInput::new(), renderer());
    assert!(field.check_validity().await.is_valid());
}

#[tokio::test]
async fn test_check_validity_has_no_side_effects() {
    let renderer = renderer();
    let field = Field::new("name", TextInput::new(), renderer.clone())
        .with_validator(rules::required("required"));

    let violations = field.check_validity().await;

    assert_eq!(violations.violations(), ["required"]);
    assert!(!field.has_error());
    assert!(!field.input_control().has_error());
    assert_eq!(renderer.region(field.id()), "");
}

// ============================================================================
// validate
// ============================================================================

#[tokio::test]
async fn test_validate_commits_normalized_value() {
    let field = Field::new("name", TextInput::trimmed(), renderer());
    let violations = field.validate(json!("  Jos  ")).await;
    assert!(violations.is_valid());
    assert_eq!(field.value(), json!("Jos"));
}

#[tokio::test]
async fn test_validate_number_input_normalizes_to_number() {
    let field = Field::new("age", NumberInput::new(), renderer()).with_validator(numeric_only());
    assert!(field.validate(json!("42")).await.is_valid());
    assert_eq!(field.value(), json!(42));

    assert!(field.validate(json!("1.5")).await.is_valid());
    assert_eq!(field.value(), json!(1.5));
}

#[tokio::test]
async fn test_validate_invalid_commits_raw_input_and_shows_errors() {
    let renderer = renderer();
    let field =
        Field::new("age", NumberInput::new(), renderer.clone()).with_validator(numeric_only());

    let violations = field.validate(json!("abc")).await;

    assert!(violations.is_invalid());
    assert_eq!(field.value(), json!("abc"));
    assert_eq!(field.errors(), vec!["must be a number"]);
    assert!(field.has_error());
    assert!(field.input_control().has_error());
    assert_eq!(renderer.region(field.id()), "must be a number\n");
}

#[tokio::test]
async fn test_validate_valid_clears_previous_errors() {
    let renderer = renderer();
    let field = Field::new("name", TextInput::new(), renderer.clone())
        .with_validator(rules::required("required"));

    field.validate(json!("")).await;
    assert!(field.has_error());

    field.validate(json!("Jos")).await;
    assert!(!field.has_error());
    assert!(!field.input_control().has_error());
    assert_eq!(renderer.region(field.id()), "");
}

#[tokio::test]
async fn test_validate_emits_change_only_when_changed() {
    let field = Field::new("name", TextInput::trimmed(), renderer());
    let mut changes = field.subscribe();

    field.validate(json!("Jos")).await;
    let event = changes.try_recv().unwrap();
    assert_eq!(event.name, "name");
    assert_eq!(event.field, field.id());
    assert_eq!(event.value, json!("Jos"));

    // Same value after normalization
    field.validate(json!(" Jos ")).await;
    assert!(matches!(changes.try_recv(), Err(TryRecvError::Empty)));
}

#[tokio::test]
async fn test_validate_invalid_emits_no_change() {
    let field = Field::new("name", TextInput::new(), renderer())
        .with_validator(rules::min_length(3, "too short"));
    let mut changes = field.subscribe();

    field.validate(json!("Jo")).await;

    assert!(matches!(changes.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(field.value(), json!("Jo"));
}

#[tokio::test]
async fn test_validate_awaits_async_validator() {
    let field = Field::new("username", TextInput::new(), renderer()).with_validator(
        formwork::validation::validator(|value| async move {
            tokio::task::yield_now().await;
            if value == json!("admin") {
                ViolationSet::single("taken")
            } else {
                ViolationSet::empty()
            }
        }),
    );

    assert_eq!(field.validate(json!("admin")).await.violations(), ["taken"]);
    assert!(field.validate(json!("jos")).await.is_valid());
}

// ============================================================================
// show_errors
// ============================================================================

#[test]
fn test_show_errors_renders_each_message_with_separator() {
    let renderer = Arc::new(LineRenderer::with_separator("<br/>"));
    let field = Field::new("email", TextInput::new(), renderer.clone());

    field.show_errors(&["required".to_string(), "not an email".to_string()]);

    assert_eq!(renderer.region(field.id()), "required<br/>not an email<br/>");
    assert!(field.has_error());
}

#[test]
fn test_show_errors_empty_is_idempotent() {
    let renderer = renderer();
    let field = Field::new("email", TextInput::new(), renderer.clone());
    field.show_errors(&["required".to_string()]);

    field.show_errors(&[]);
    field.show_errors(&[]);

    assert!(!field.has_error());
    assert!(!field.input_control().has_error());
    assert!(field.errors().is_empty());
    assert_eq!(renderer.region(field.id()), "");
}

// ============================================================================
// Assignment
// ============================================================================

#[test]
fn test_switch_rejects_text() {
    let field = Field::new("terms", Switch::new(), renderer());
    let err = field.set_value("yes").unwrap_err();
    assert!(matches!(err, AssignmentError::TypeMismatch { ref field, .. } if field == "terms"));
    assert_eq!(field.value(), json!(false));
}

#[test]
fn test_number_input_rejects_unparsable_text() {
    let field = Field::new("age", NumberInput::new(), renderer());
    let err = field.set_value("forty").unwrap_err();
    assert_eq!(
        err,
        AssignmentError::Unparsable {
            field: "age".to_string(),
            value: "forty".to_string(),
        }
    );
    assert!(err.to_string().contains("forty"));

    field.set_value("40").unwrap();
    assert_eq!(field.value(), json!(40));
}

#[test]
fn test_text_input_stringifies_scalars() {
    let field = Field::new("code", TextInput::new(), renderer());
    field.set_value(12).unwrap();
    assert_eq!(field.value(), json!("12"));
    assert!(field.set_value(json!(["a"])).is_err());
}

#[test]
fn test_checkbox_accepts_option_values() {
    let field = Field::new("color", Checkbox::new("red"), renderer());

    field.set_value(json!(["green", "red"])).unwrap();
    assert_eq!(field.value(), json!(true));

    field.set_value("green").unwrap();
    assert_eq!(field.value(), json!(false));
    assert_eq!(field.extracted_value(), json!(false));

    field.set_value(true).unwrap();
    assert_eq!(field.extracted_value(), json!("red"));
}

#[test]
fn test_clear_resets_value() {
    let field = Field::new("name", TextInput::new(), renderer())
        .with_value("Jos")
        .unwrap();
    field.clear();
    assert_eq!(field.value(), json!(""));
}

// ============================================================================
// Focus, rendering, membership
// ============================================================================

#[test]
fn test_focus_requests_focus_on_control() {
    let field = Field::new("name", TextInput::new(), renderer());
    field.focus();
    assert!(field.input_control().take_focus_request());
    assert!(!field.input_control().take_focus_request());
}

#[test]
fn test_render_builds_all_regions() {
    let field = Field::new("terms", Switch::new(), renderer())
        .with_label("Accept terms")
        .with_value(true)
        .unwrap();
    field.show_errors(&["must be accepted".to_string()]);

    let view = field.render();

    assert_eq!(view.label.target, "terms");
    assert_eq!(view.label.text, "Accept terms");
    assert_eq!(view.annotation, None);
    assert_eq!(view.input.control_type, "switch");
    assert_eq!(view.input.checked, Some(true));
    assert!(view.input.error);
    assert!(view.error.flagged);
    assert_eq!(view.error.messages, vec!["must be accepted"]);
}

#[test]
fn test_attach_and_detach() {
    let form = Form::new();
    let field = Field::new("name", TextInput::new(), renderer());
    assert!(!field.is_form_input());

    field.attach(&form);
    field.attach(&form);
    assert!(field.is_form_input());
    assert_eq!(form.len(), 1);
    assert_eq!(field.form().map(|f| f.id()), Some(form.id()));

    field.detach();
    assert!(!field.is_form_input());
    assert!(form.is_empty());
}

#[test]
fn test_attach_moves_field_between_forms() {
    let first = Form::new();
    let second = Form::new();
    let field = Field::new("name", TextInput::new(), renderer());

    field.attach(&first);
    field.attach(&second);

    assert!(first.is_empty());
    assert_eq!(second.fields(), vec![field]);
}
