//! Field command presentation: switch, preview, show and list as text or JSON.

use crate::command::{
    FieldListResult, FieldPreviewResult, FieldShowResult, FieldSwitchResult, KeyPress,
};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde_json::json;

/// Config file name quoted in user-facing messages.
const FIELD_CONFIG_NAME: &str = "field_config.ini";

pub fn format_switch_result_text(result: &FieldSwitchResult) -> String {
    let outcome = &result.outcome;
    let mut lines = vec![format!(
        "Switching field to {} with defaults from {}",
        outcome.field, FIELD_CONFIG_NAME
    )];
    if let KeyPress::Failed { key, reason } = &result.key_press {
        lines.push(format!("Warning: could not press {}: {}", key, reason));
    }
    if !outcome.unmatched_keys.is_empty() {
        lines.push(format!(
            "Warning: {} has no line for: {}",
            outcome.current_config.display(),
            outcome.unmatched_keys.join(", ")
        ));
    }
    lines.push(format!("Field switched to {} with defaults applied", outcome.field));
    lines.join("\n")
}

pub fn format_switch_result_json(result: &FieldSwitchResult) -> String {
    let key_press = match &result.key_press {
        KeyPress::Sent { key } => json!({ "status": "sent", "key": key }),
        KeyPress::Skipped => json!({ "status": "skipped" }),
        KeyPress::Failed { key, reason } => {
            json!({ "status": "failed", "key": key, "reason": reason })
        }
    };
    let out = json!({
        "field": result.outcome.field,
        "keys_patched": result.outcome.keys_patched,
        "unmatched_keys": result.outcome.unmatched_keys,
        "current_config": result.outcome.current_config.display().to_string(),
        "key_press": key_press,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_preview_result_text(result: &FieldPreviewResult) -> String {
    let plan = &result.plan;
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Value", "Status"]);
    for (key, value) in &plan.assignments {
        let status = if plan.unmatched_keys.contains(key) {
            "no line"
        } else {
            "patched"
        };
        table.add_row(vec![key.as_str(), value.as_str(), status]);
    }
    format!(
        "Dry run: switching to {} would set {} key(s); nothing was written.\n{}",
        plan.field,
        plan.patched_count(),
        table
    )
}

pub fn format_preview_result_json(result: &FieldPreviewResult) -> String {
    let plan = &result.plan;
    let assignments: Vec<_> = plan
        .assignments
        .iter()
        .map(|(key, value)| json!({ "key": key, "value": value }))
        .collect();
    let out = json!({
        "field": plan.field.as_str(),
        "dry_run": true,
        "assignments": assignments,
        "unmatched_keys": plan.unmatched_keys,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_show_result_text(result: &FieldShowResult) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Attribute", "nm_config.ini key", "Value"]);
    for (attribute, value) in result.defaults.iter() {
        table.add_row(vec![attribute.source_key(), attribute.target_key(), value]);
    }
    format!("Defaults for {}:\n{}", result.field, table)
}

pub fn format_show_result_json(result: &FieldShowResult) -> String {
    let target: serde_json::Map<String, serde_json::Value> = result
        .target
        .iter()
        .map(|(key, value)| (key.to_string(), json!(value)))
        .collect();
    let out = json!({
        "field": result.field.as_str(),
        "defaults": result.defaults,
        "target": target,
    });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_list_result_text(result: &FieldListResult) -> String {
    let names: Vec<_> = result.fields.iter().map(|f| f.as_str()).collect();
    format!("Valid fields:\n{}", names.join(", "))
}

pub fn format_list_result_json(result: &FieldListResult) -> String {
    let names: Vec<_> = result.fields.iter().map(|f| f.as_str()).collect();
    let out = json!({ "fields": names, "total": names.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
