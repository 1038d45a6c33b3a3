use chrono::{TimeZone, Utc};
use golden_core::{
    ExampleTool, ProcessedItem, RunOutcome, Status, ToolConfig, ToolError, log_level_for,
};
use serde_json::{Value, json};
use tracing::Level;

fn default_tool() -> ExampleTool {
    ExampleTool::new(ToolConfig::default())
}

fn run_to_json(tool: &ExampleTool, input: &Value) -> Value {
    serde_json::to_value(tool.run(input)).expect("outcome should serialize")
}

#[test]
fn quiet_runs_log_at_info() {
    assert_eq!(log_level_for(false), Level::INFO);
}

#[test]
fn verbose_runs_log_at_debug() {
    assert_eq!(log_level_for(true), Level::DEBUG);
}

#[test]
fn process_data_reports_keys_and_tool_info() {
    let tool = default_tool();
    let input = json!({"key1": "value1", "key2": "value2"});

    let report = tool.process_data(&input).expect("mapping should process");

    assert_eq!(report.status, Status::Success);
    assert_eq!(report.input_keys, vec!["key1", "key2"]);
    assert_eq!(report.tool_info.name, "example-tool");
    assert_eq!(report.tool_info.version, "1.0.0");
    assert!(report.item_count.is_none());
}

#[test]
fn process_data_keeps_document_key_order() {
    let tool = default_tool();
    let input: Value =
        serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).expect("valid json");

    let report = tool.process_data(&input).expect("mapping should process");

    assert_eq!(report.input_keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn process_data_counts_items() {
    let tool = default_tool();
    let input: Value =
        serde_json::from_str(r#"{"items": ["a", "b"], "x": 1}"#).expect("valid json");

    let report = tool.process_data(&input).expect("mapping should process");

    assert_eq!(report.item_count, Some(2));
    assert_eq!(report.input_keys, vec!["items", "x"]);
    assert_eq!(
        report.processed_items,
        Some(vec![
            ProcessedItem {
                id: 0,
                processed: true
            },
            ProcessedItem {
                id: 1,
                processed: true
            },
        ])
    );
}

#[test]
fn process_data_counts_object_and_string_items() {
    let tool = default_tool();

    let object_items = tool
        .process_data(&json!({"items": {"a": 1, "b": 2, "c": 3}}))
        .expect("object items are countable");
    assert_eq!(object_items.item_count, Some(3));

    let string_items = tool
        .process_data(&json!({"items": "héllo"}))
        .expect("string items are countable");
    assert_eq!(string_items.item_count, Some(5));
}

#[test]
fn process_data_rejects_scalar_items() {
    let tool = default_tool();

    let err = tool
        .process_data(&json!({"items": 3}))
        .expect_err("numbers have no length");

    assert_eq!(err, ToolError::ItemsNotCountable { kind: "number" });
}

#[test]
fn process_data_rejects_bool_items() {
    let tool = default_tool();

    let err = tool
        .process_data(&json!({"items": true}))
        .expect_err("booleans have no length");

    assert_eq!(err, ToolError::ItemsNotCountable { kind: "bool" });
    assert_eq!(err.to_string(), "items value of type bool has no length");
}

#[test]
fn process_data_rejects_non_mapping() {
    let tool = default_tool();

    let err = tool
        .process_data(&json!("not a dict"))
        .expect_err("strings are not mappings");

    assert_eq!(err, ToolError::InvalidInput);
    assert!(err.to_string().contains("Input data must be a dictionary"));
}

#[test]
fn empty_mapping_has_no_item_count() {
    let tool = default_tool();

    let value = run_to_json(&tool, &json!({}));

    assert_eq!(value["status"], "success");
    assert_eq!(value["input_keys"], json!([]));
    assert!(value.get("item_count").is_none());
    assert!(value.get("processed_items").is_none());
}

#[test]
fn processed_at_is_rfc3339_utc() {
    let tool = default_tool();
    let stamp = Utc
        .with_ymd_and_hms(2025, 6, 20, 22, 0, 0)
        .single()
        .expect("valid timestamp");

    let report = tool
        .process_data_at(&json!({"a": 1}), stamp)
        .expect("mapping should process");
    let value = serde_json::to_value(&report).expect("report should serialize");

    assert_eq!(value["processed_at"], "2025-06-20T22:00:00Z");
}

#[test]
fn run_success_serializes_flat_report() {
    let tool = default_tool();

    let outcome = tool.run(&json!({"test": "data"}));
    assert!(outcome.is_success());

    let value = serde_json::to_value(&outcome).expect("outcome should serialize");
    assert_eq!(value["status"], "success");
    assert_eq!(value["input_keys"], json!(["test"]));
    assert_eq!(value["tool_info"], json!({"name": "example-tool", "version": "1.0.0"}));
}

#[test]
fn run_wraps_invalid_input_in_envelope() {
    let tool = default_tool();

    let outcome = tool.run(&json!("invalid input"));
    assert_eq!(outcome.status(), Status::Error);
    assert!(matches!(outcome, RunOutcome::Failure(_)));

    let value = serde_json::to_value(&outcome).expect("outcome should serialize");
    assert_eq!(value["status"], "error");
    assert_eq!(value["type"], "InvalidInput");
    let message = value["message"].as_str().expect("message is a string");
    assert!(message.contains("Input data must be a dictionary"));
}

#[test]
fn run_wraps_uncountable_items_in_envelope() {
    let tool = default_tool();

    let value = run_to_json(&tool, &json!({"items": null}));

    assert_eq!(value["status"], "error");
    assert_eq!(value["type"], "ItemsNotCountable");
    assert_eq!(value["message"], "items value of type null has no length");
}

#[test]
fn configured_name_and_version_flow_into_reports() {
    let config = ToolConfig {
        name: "renamed-tool".to_string(),
        version: "2.3.4".to_string(),
        ..ToolConfig::default()
    };
    let tool = ExampleTool::new(config);

    let report = tool.process_data(&json!({})).expect("mapping should process");

    assert_eq!(report.tool_info.name, "renamed-tool");
    assert_eq!(report.tool_info.version, "2.3.4");
}

#[test]
fn tool_from_unreadable_config_uses_defaults() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ nope").expect("write fixture");

    let tool = ExampleTool::from_config_path(Some(&path));

    assert_eq!(tool.config(), &ToolConfig::default());
}
