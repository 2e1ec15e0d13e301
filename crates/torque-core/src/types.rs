use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Chart family the query service asks the client to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationType {
    /// Vertical bars, one per record.
    Bar,
    /// Proportional slices, one per record.
    Pie,
    /// A single series over an ordered axis.
    Line,
    /// Raw tabular display. Also the fallback for absent or unrecognized tags.
    Table,
}

impl VisualizationType {
    /// Resolve a wire tag to a visualization type.
    ///
    /// An absent tag and an unrecognized tag both resolve to [`Table`]: the
    /// service may introduce new tags without breaking older clients, so an
    /// unknown value is a fallback, never an error. Matching is exact — the
    /// service emits lowercase tags.
    ///
    /// [`Table`]: VisualizationType::Table
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("bar") => VisualizationType::Bar,
            Some("pie") => VisualizationType::Pie,
            Some("line") => VisualizationType::Line,
            _ => VisualizationType::Table,
        }
    }
}

// =============================================================================
// Wire types
// =============================================================================

/// One row of a query result.
///
/// `name` labels the row and `value` carries its magnitude; the chart paths
/// bind their axes to these two fields. Any additional fields the service
/// returns are preserved verbatim so the table path can show the full row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub value: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Create a record with no extra fields.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            extra: serde_json::Map::new(),
        }
    }
}

/// Decoded response body from the query-resolution service.
///
/// Every key is optional on the wire. A missing `data` key means the service
/// resolved the query but has nothing to show — which is not the same thing
/// as an empty `data` array (that renders an empty chart or table).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Record>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl QueryResult {
    /// The visualization the service asked for, with the table fallback applied.
    pub fn visualization(&self) -> VisualizationType {
        VisualizationType::from_tag(self.visualization_type.as_deref())
    }

    /// Title to put on a chart; empty when the service sent none.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Tag resolution ----

    #[test]
    fn test_from_tag_known_values() {
        assert_eq!(
            VisualizationType::from_tag(Some("bar")),
            VisualizationType::Bar
        );
        assert_eq!(
            VisualizationType::from_tag(Some("pie")),
            VisualizationType::Pie
        );
        assert_eq!(
            VisualizationType::from_tag(Some("line")),
            VisualizationType::Line
        );
        assert_eq!(
            VisualizationType::from_tag(Some("table")),
            VisualizationType::Table
        );
    }

    #[test]
    fn test_from_tag_absent_falls_back_to_table() {
        assert_eq!(VisualizationType::from_tag(None), VisualizationType::Table);
    }

    #[test]
    fn test_from_tag_unrecognized_falls_back_to_table() {
        assert_eq!(
            VisualizationType::from_tag(Some("scatter")),
            VisualizationType::Table
        );
        assert_eq!(
            VisualizationType::from_tag(Some("")),
            VisualizationType::Table
        );
    }

    #[test]
    fn test_from_tag_is_case_sensitive() {
        // The service emits lowercase tags; anything else is an unknown tag.
        assert_eq!(
            VisualizationType::from_tag(Some("BAR")),
            VisualizationType::Table
        );
        assert_eq!(
            VisualizationType::from_tag(Some("Pie")),
            VisualizationType::Table
        );
    }

    // ---- QueryResult decoding ----

    #[test]
    fn test_decode_full_result() {
        let body = r#"{
            "visualizationType": "pie",
            "data": [
                {"name": "Oil Change", "value": 40},
                {"name": "Brake Service", "value": 60}
            ],
            "title": "Service Mix"
        }"#;
        let result: QueryResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.visualization(), VisualizationType::Pie);
        assert_eq!(result.title(), "Service Mix");
        let data = result.data.unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].name, "Oil Change");
        assert_eq!(data[0].value, 40.0);
        assert_eq!(data[1].name, "Brake Service");
        assert_eq!(data[1].value, 60.0);
    }

    #[test]
    fn test_decode_all_keys_absent() {
        let result: QueryResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.visualization_type, None);
        assert_eq!(result.data, None);
        assert_eq!(result.title, None);
        assert_eq!(result.visualization(), VisualizationType::Table);
        assert_eq!(result.title(), "");
    }

    #[test]
    fn test_decode_empty_data_is_not_absent_data() {
        let result: QueryResult = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(result.data, Some(vec![]));
    }

    #[test]
    fn test_decode_integer_and_float_values() {
        let body = r#"{"data": [{"name": "Jan", "value": 1000}, {"name": "Feb", "value": 10.5}]}"#;
        let result: QueryResult = serde_json::from_str(body).unwrap();
        let data = result.data.unwrap();
        assert_eq!(data[0].value, 1000.0);
        assert_eq!(data[1].value, 10.5);
    }

    #[test]
    fn test_decode_record_extra_fields_preserved() {
        let body = r#"{"data": [{"name": "Oil Change", "value": 40, "technician": "Ana", "bay": 3}]}"#;
        let result: QueryResult = serde_json::from_str(body).unwrap();
        let record = &result.data.unwrap()[0];
        assert_eq!(record.extra["technician"], "Ana");
        assert_eq!(record.extra["bay"], 3);

        // Re-serialization keeps the full row shape.
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["name"], "Oil Change");
        assert_eq!(json["technician"], "Ana");
        assert_eq!(json["bay"], 3);
    }

    #[test]
    fn test_decode_record_missing_value_is_rejected() {
        let body = r#"{"data": [{"name": "Oil Change"}]}"#;
        let result: std::result::Result<QueryResult, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_record_missing_name_is_rejected() {
        let body = r#"{"data": [{"value": 40}]}"#;
        let result: std::result::Result<QueryResult, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_record_non_numeric_value_is_rejected() {
        let body = r#"{"data": [{"name": "Oil Change", "value": "forty"}]}"#;
        let result: std::result::Result<QueryResult, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_non_object_body_is_rejected() {
        assert!(serde_json::from_str::<QueryResult>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<QueryResult>("\"revenue\"").is_err());
    }

    #[test]
    fn test_unknown_visualization_tag_decodes_without_error() {
        let body = r#"{"visualizationType": "heatmap", "data": []}"#;
        let result: QueryResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.visualization_type.as_deref(), Some("heatmap"));
        assert_eq!(result.visualization(), VisualizationType::Table);
    }

    // ---- Serialization ----

    #[test]
    fn test_serialize_skips_absent_keys() {
        let result = QueryResult::default();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_serialize_uses_camel_case_tag() {
        let result = QueryResult {
            visualization_type: Some("bar".to_string()),
            data: Some(vec![Record::new("Jan", 1000.0)]),
            title: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["visualizationType"], "bar");
        assert_eq!(json["data"][0]["name"], "Jan");
        assert_eq!(json["data"][0]["value"], 1000.0);
    }

    #[test]
    fn test_visualization_type_serde_tags() {
        assert_eq!(
            serde_json::to_string(&VisualizationType::Bar).unwrap(),
            "\"bar\""
        );
        let parsed: VisualizationType = serde_json::from_str("\"line\"").unwrap();
        assert_eq!(parsed, VisualizationType::Line);
    }

    #[test]
    fn test_record_new_has_no_extras() {
        let record = Record::new("Jan", 1000.0);
        assert_eq!(record.name, "Jan");
        assert_eq!(record.value, 1000.0);
        assert!(record.extra.is_empty());
    }
}
