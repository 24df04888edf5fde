//! Tests for the built-in validation rules.

use formwork::validation::{ViolationSet, rules, validator};
use serde_json::json;

#[tokio::test]
async fn test_required() {
    let check = rules::required("required");
    assert!(check(json!("")).await.is_invalid());
    assert!(check(json!("   ")).await.is_invalid());
    assert!(check(json!(null)).await.is_invalid());
    assert!(check(json!([])).await.is_invalid());
    assert!(check(json!("Jos")).await.is_valid());
    assert!(check(json!(0)).await.is_valid());
    assert!(check(json!(false)).await.is_valid());
}

#[tokio::test]
async fn test_length_bounds_count_characters() {
    let min = rules::min_length(3, "too short");
    let max = rules::max_length(3, "too long");
    assert!(min(json!("ab")).await.is_invalid());
    assert!(min(json!("äöü")).await.is_valid());
    assert!(max(json!("äöü")).await.is_valid());
    assert!(max(json!("abcd")).await.is_invalid());
    assert!(min(json!(1)).await.is_valid());
}

#[tokio::test]
async fn test_pattern() {
    let zip = rules::pattern(r"^\d{4}$", "four digits").unwrap();
    assert!(zip(json!("9000")).await.is_valid());
    assert_eq!(zip(json!("90a0")).await.violations(), ["four digits"]);
    assert!(rules::pattern("(", "broken").is_err());
}

#[tokio::test]
async fn test_email_allows_empty() {
    let check = rules::email("not an email");
    assert!(check(json!("")).await.is_valid());
    assert!(check(json!("jos@example.com")).await.is_valid());
    assert!(check(json!("jos")).await.is_invalid());
}

#[tokio::test]
async fn test_equals_and_checked() {
    assert!(rules::equals("yes", "must be yes")(json!("yes")).await.is_valid());
    assert!(rules::equals("yes", "must be yes")(json!("no")).await.is_invalid());
    assert!(rules::checked("accept")(json!(true)).await.is_valid());
    assert!(rules::checked("accept")(json!(false)).await.is_invalid());
}

#[tokio::test]
async fn test_rule_async() {
    let check = rules::rule_async(
        |value| async move {
            tokio::task::yield_now().await;
            value != json!("admin")
        },
        "taken",
    );
    assert!(check(json!("jos")).await.is_valid());
    assert_eq!(check(json!("admin")).await.violations(), ["taken"]);
}

#[tokio::test]
async fn test_all_keeps_rule_order() {
    let check = rules::all(vec![
        rules::required("required"),
        rules::min_length(3, "too short"),
        validator(|_| async { ViolationSet::single("always") }),
    ]);

    assert_eq!(
        check(json!("")).await.violations(),
        ["required", "too short", "always"]
    );
    assert_eq!(check(json!("Jos")).await.violations(), ["always"]);
}
