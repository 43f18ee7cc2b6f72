use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;

use super::data_processing::Frame;

/// Renders the frame as a bordered text table for the diagnostic print.
pub fn render_frame(frame: &Frame) -> String {
    if frame.columns.is_empty() {
        return String::from("(no rows)");
    }

    let mut builder = Builder::default();
    builder.push_record(frame.columns.iter().cloned());
    for row in &frame.rows {
        builder.push_record(row.iter().map(render_cell));
    }

    builder.build().with(Style::rounded()).to_string()
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
