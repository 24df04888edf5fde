//! Tests for record extraction, multi-value reduction and distribution.

use std::sync::Arc;

use formwork::field::{Checkbox, Field, NumberInput, Switch, TextInput};
use formwork::form::{Form, FormData};
use formwork::render::LineRenderer;
use serde_json::json;

fn text(form: &Form, renderer: &Arc<LineRenderer>, name: &str, value: &str) -> Field {
    let field = Field::new(name, TextInput::new(), renderer.clone())
        .with_value(value)
        .unwrap();
    field.attach(form);
    field
}

fn checkbox(form: &Form, renderer: &Arc<LineRenderer>, name: &str, option: &str, checked: bool) -> Field {
    let field = Field::new(name, Checkbox::new(option), renderer.clone())
        .with_value(checked)
        .unwrap();
    field.attach(form);
    field
}

// ============================================================================
// Extraction and reduction
// ============================================================================

#[test]
fn test_single_name_stays_scalar() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    text(&form, &renderer, "name", "Jos");

    assert_eq!(form.form_data().to_value(), json!({ "name": "Jos" }));
}

#[test]
fn test_repeated_name_becomes_array_in_discovery_order() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    text(&form, &renderer, "color", "red");
    text(&form, &renderer, "color", "green");
    text(&form, &renderer, "color", "blue");

    assert_eq!(
        form.form_data().to_value(),
        json!({ "color": ["red", "green", "blue"] })
    );
}

#[test]
fn test_promotion_is_per_name() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    text(&form, &renderer, "color", "red");
    text(&form, &renderer, "name", "Jos");
    text(&form, &renderer, "color", "blue");

    let data = form.form_data();
    assert_eq!(data.get("color"), Some(&json!(["red", "blue"])));
    assert_eq!(data.get("name"), Some(&json!("Jos")));
}

#[test]
fn test_keys_keep_discovery_order() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    text(&form, &renderer, "surname", "Bosmans");
    text(&form, &renderer, "name", "Jos");
    text(&form, &renderer, "city", "Gent");

    let data = form.form_data();
    let names: Vec<&str> = data.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["surname", "name", "city"]);
}

#[test]
fn test_checkbox_group_has_one_entry_per_checkbox() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    checkbox(&form, &renderer, "color", "red", true);
    checkbox(&form, &renderer, "color", "green", false);
    checkbox(&form, &renderer, "color", "blue", true);

    assert_eq!(
        form.form_data().to_value(),
        json!({ "color": ["red", false, "blue"] })
    );
}

#[test]
fn test_group_starting_unchecked_wraps_its_state() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    checkbox(&form, &renderer, "color", "red", false);
    checkbox(&form, &renderer, "color", "blue", true);

    assert_eq!(form.form_data().to_value(), json!({ "color": [false, "blue"] }));
}

#[test]
fn test_single_checkbox_in_group_stays_scalar() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    checkbox(&form, &renderer, "color", "red", true);

    assert_eq!(form.form_data().to_value(), json!({ "color": "red" }));
}

#[test]
fn test_unchecked_lone_checkbox_yields_its_state() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    checkbox(&form, &renderer, "color", "red", false);

    assert_eq!(form.form_data().to_value(), json!({ "color": false }));
}

#[test]
fn test_switch_contributes_checked_state() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    Field::new("newsletter", Switch::new(), renderer.clone()).attach(&form);
    let terms = Field::new("terms", Switch::new(), renderer.clone());
    terms.set_value(true).unwrap();
    terms.attach(&form);

    assert_eq!(
        form.form_data().to_value(),
        json!({ "newsletter": false, "terms": true })
    );
}

#[test]
fn test_promotion_wraps_falsy_first_value() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    Field::new("flags", Switch::new(), renderer.clone()).attach(&form);
    let second = Field::new("flags", Switch::new(), renderer.clone());
    second.set_value(true).unwrap();
    second.attach(&form);

    assert_eq!(form.form_data().to_value(), json!({ "flags": [false, true] }));
}

#[test]
fn test_record_is_rebuilt_on_every_read() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    let name = text(&form, &renderer, "name", "Jos");
    assert_eq!(form.form_data().get("name"), Some(&json!("Jos")));

    name.set_value("Mieke").unwrap();
    assert_eq!(form.form_data().get("name"), Some(&json!("Mieke")));

    name.detach();
    assert!(form.form_data().is_empty());
}

// ============================================================================
// Distribution
// ============================================================================

#[test]
fn test_set_form_data_distributes_by_name() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    text(&form, &renderer, "name", "");
    text(&form, &renderer, "surname", "");

    let record = FormData::from_value(json!({ "name": "Jos", "surname": "Bosmans" })).unwrap();
    form.set_form_data(&record);

    assert_eq!(form.form_data(), record);
}

#[test]
fn test_set_form_data_leaves_missing_names_untouched() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    let name = text(&form, &renderer, "name", "Jos");
    text(&form, &renderer, "surname", "");

    form.set_form_data(&FormData::from_iter([("surname", "Bosmans")]));

    assert_eq!(name.value(), json!("Jos"));
}

#[test]
fn test_set_form_data_skips_failing_fields() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    let age = Field::new("age", NumberInput::new(), renderer.clone());
    age.attach(&form);
    let terms = Field::new("terms", Switch::new(), renderer.clone());
    terms.attach(&form);
    let name = text(&form, &renderer, "name", "");

    let record = FormData::from_value(json!({
        "age": "forty",
        "terms": "yes",
        "name": "Jos",
    }))
    .unwrap();
    form.set_form_data(&record);

    assert_eq!(age.value(), json!(null));
    assert_eq!(terms.value(), json!(false));
    assert_eq!(name.value(), json!("Jos"));
}

#[test]
fn test_set_form_data_checks_group_members() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    let red = checkbox(&form, &renderer, "color", "red", false);
    let green = checkbox(&form, &renderer, "color", "green", true);
    let blue = checkbox(&form, &renderer, "color", "blue", false);

    form.set_form_data(&FormData::from_value(json!({ "color": ["red", "blue"] })).unwrap());

    assert_eq!(red.value(), json!(true));
    assert_eq!(green.value(), json!(false));
    assert_eq!(blue.value(), json!(true));
}

#[test]
fn test_put_form_value_applies_to_every_same_named_field() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    let first = text(&form, &renderer, "alias", "a");
    let second = text(&form, &renderer, "alias", "b");
    let other = text(&form, &renderer, "name", "Jos");

    form.put_form_value("alias", "same");

    assert_eq!(first.value(), json!("same"));
    assert_eq!(second.value(), json!("same"));
    assert_eq!(other.value(), json!("Jos"));
}

#[test]
fn test_clear_form_input() {
    let form = Form::new();
    let renderer = Arc::new(LineRenderer::new());
    let red = checkbox(&form, &renderer, "color", "red", true);
    let blue = checkbox(&form, &renderer, "color", "blue", true);
    let name = text(&form, &renderer, "name", "Jos");

    form.clear_form_input("color");

    assert_eq!(red.value(), json!(false));
    assert_eq!(blue.value(), json!(false));
    assert_eq!(name.value(), json!("Jos"));
    assert_eq!(
        form.form_data().to_value(),
        json!({ "color": [false, false], "name": "Jos" })
    );
}
