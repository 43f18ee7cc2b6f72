use serde_json::{Map, Value};
use thiserror::Error;

/// One page of the upstream teams listing: the raw records plus the cursor
/// advertised by the response `meta` object, when one is present.
#[derive(Debug)]
pub struct TeamsPage {
    pub records: Vec<Map<String, Value>>,
    pub next_page: Option<u32>,
}

#[derive(Debug, Error)]
pub enum ParseTeamsPageError {
    #[error("DeserializeBody: {source}")]
    DeserializeBody {
        #[from]
        source: serde_json::Error,
    },

    #[error("Missing data field in response body")]
    DataFieldMissing,

    #[error("Response data field is not an array")]
    DataFieldNotAnArray,

    #[error("Response data element {index} is not an object")]
    RecordNotAnObject { index: usize },
}

/// Parses one response body into team records.
///
/// The body must be a JSON object with a `data` array of objects. The `meta`
/// object is optional; a missing `meta` or a null `next_page` marks the last
/// page.
pub fn parse_teams_page(body: &str) -> Result<TeamsPage, ParseTeamsPageError> {
    let parsed: Value = serde_json::from_str(body)?;

    let data = parsed
        .get("data")
        .ok_or(ParseTeamsPageError::DataFieldMissing)?;
    let items = data
        .as_array()
        .ok_or(ParseTeamsPageError::DataFieldNotAnArray)?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record = item
            .as_object()
            .ok_or(ParseTeamsPageError::RecordNotAnObject { index })?;
        records.push(record.clone());
    }

    let next_page = parsed
        .get("meta")
        .and_then(|meta| meta.get("next_page"))
        .and_then(Value::as_u64)
        .map(|page| page as u32);

    Ok(TeamsPage { records, next_page })
}

/// Tabular view of the fetched records: one row per record, columns in
/// first-appearance order of the record keys, absent keys filled with null.
/// Values pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Frame {
    pub fn from_records(records: &[Map<String, Value>]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !columns.iter().any(|column| column == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Frame { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_records_and_builds_frame_in_order() {
        let body = r#"{"data": [{"id": 1, "name": "Hawks"}, {"id": 2, "name": "Celtics"}]}"#;

        let page = parse_teams_page(body).expect("valid body");
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.next_page, None);

        let frame = Frame::from_records(&page.records);
        assert_eq!(frame.columns, vec!["id", "name"]);
        assert_eq!(
            frame.rows,
            vec![
                vec![json!(1), json!("Hawks")],
                vec![json!(2), json!("Celtics")],
            ]
        );
    }

    #[test]
    fn empty_data_yields_zero_rows() {
        let page = parse_teams_page(r#"{"data": []}"#).expect("valid body");

        let frame = Frame::from_records(&page.records);
        assert!(frame.is_empty());
        assert_eq!(frame.len(), 0);
        assert!(frame.columns.is_empty());
    }

    #[test]
    fn missing_data_field_is_rejected() {
        let err = parse_teams_page(r#"{"teams": []}"#).expect_err("no data field");

        assert!(matches!(err, ParseTeamsPageError::DataFieldMissing));
    }

    #[test]
    fn malformed_body_is_rejected() {
        let err = parse_teams_page("{not json").expect_err("malformed body");

        assert!(matches!(err, ParseTeamsPageError::DeserializeBody { .. }));
    }

    #[test]
    fn non_array_data_field_is_rejected() {
        let err = parse_teams_page(r#"{"data": {"id": 1}}"#).expect_err("data must be an array");

        assert!(matches!(err, ParseTeamsPageError::DataFieldNotAnArray));
    }

    #[test]
    fn non_object_record_is_rejected() {
        let err = parse_teams_page(r#"{"data": [{"id": 1}, 2]}"#).expect_err("records are objects");

        assert!(matches!(
            err,
            ParseTeamsPageError::RecordNotAnObject { index: 1 }
        ));
    }

    #[test]
    fn next_page_comes_from_meta() {
        let body = r#"{"data": [], "meta": {"current_page": 0, "next_page": 1}}"#;
        let page = parse_teams_page(body).expect("valid body");
        assert_eq!(page.next_page, Some(1));

        let last = r#"{"data": [], "meta": {"current_page": 1, "next_page": null}}"#;
        let page = parse_teams_page(last).expect("valid body");
        assert_eq!(page.next_page, None);
    }

    #[test]
    fn ragged_records_union_columns_and_null_fill() {
        let body = r#"{"data": [{"id": 1, "name": "Hawks"}, {"id": 2, "city": "Boston", "name": "Celtics"}]}"#;

        let page = parse_teams_page(body).expect("valid body");
        let frame = Frame::from_records(&page.records);

        assert_eq!(frame.columns, vec!["id", "name", "city"]);
        assert_eq!(
            frame.rows,
            vec![
                vec![json!(1), json!("Hawks"), Value::Null],
                vec![json!(2), json!("Celtics"), json!("Boston")],
            ]
        );
    }
}
