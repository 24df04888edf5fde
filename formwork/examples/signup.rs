//! Signup Example
//!
//! A demo showcasing formwork's form handling:
//! - Text, numeric, checkbox-group and switch fields
//! - Field-level and cross-field validation
//! - Submit with errors bound and focus moved to the first invalid field
//!
//! Log output goes to `signup.log`.

use std::fs::File;
use std::sync::Arc;

use formwork::prelude::*;
use log::LevelFilter;
use serde_json::json;
use simplelog::{Config, WriteLogger};

fn build_form(renderer: &Arc<LineRenderer>) -> Form {
    let form = Form::with_config(FormConfig::new("signup"));

    Field::new("name", TextInput::trimmed(), renderer.clone())
        .with_label("Name")
        .with_validator(rules::required("Name is required"))
        .attach(&form);

    Field::new("email", TextInput::trimmed(), renderer.clone())
        .with_label("Email")
        .with_annotation("We never share your address")
        .with_validator(rules::all(vec![
            rules::required("Email is required"),
            rules::email("Please enter a valid email"),
        ]))
        .attach(&form);

    Field::new("age", NumberInput::new(), renderer.clone())
        .with_label("Age")
        .attach(&form);

    for topic in ["rust", "forms", "async"] {
        Field::new("topics", Checkbox::new(topic), renderer.clone())
            .with_label(topic)
            .attach(&form);
    }

    Field::new("terms", Switch::new(), renderer.clone())
        .with_label("I accept the terms and conditions")
        .with_validator(rules::checked("You must accept the terms"))
        .attach(&form);

    Field::new("csrf", TextInput::new(), renderer.clone())
        .with_no_submit()
        .with_validator(rules::required("Missing token"))
        .attach(&form);

    form
}

fn print_form(form: &Form, renderer: &LineRenderer) {
    for field in form.fields() {
        let view = field.render();
        println!(
            "  {:<8} [{}] {}",
            view.label.target,
            view.input.control_type,
            view.input.value
        );
        let region = renderer.region(field.id());
        if !region.is_empty() {
            print!("           ! {}", region);
        }
    }
}

#[tokio::main]
async fn main() {
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let renderer = Arc::new(LineRenderer::new());
    let form = build_form(&renderer);

    // Pre-fill, including one value the age field rejects
    if let Some(record) = FormData::from_value(json!({
        "name": "Jos",
        "age": "unknown",
        "topics": ["rust", "async"],
        "csrf": "3f2a9c",
    })) {
        form.set_form_data(&record);
    }

    // The user types an invalid email
    if let Some(email) = form.fields_named("email").first() {
        email.validate(json!("jos@")).await;
    }

    println!("First attempt:");
    let outcome = form
        .submit(Submission::new().on_invalid(|violations| async move {
            for (name, set) in violations.iter() {
                log::warn!("{}: {}", name, set);
            }
        }))
        .await;
    print_form(&form, &renderer);
    println!("  -> valid: {}", outcome.is_valid());

    form.put_form_value("email", "jos@example.com");
    form.put_form_value("terms", true);

    println!("Second attempt:");
    let outcome = form
        .submit(
            Submission::new()
                .validator(|data| async move {
                    let mut violations = FormViolations::new();
                    if data.get("age").and_then(|age| age.as_i64()).is_some_and(|age| age < 18) {
                        violations.insert("age", "You must be at least 18");
                    }
                    violations
                })
                .on_valid(|data| async move {
                    println!("  submitted {}", data.to_value());
                }),
        )
        .await;
    print_form(&form, &renderer);
    println!("  -> valid: {}", outcome.is_valid());
}
