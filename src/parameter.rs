use crate::{de, schema::Schema};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    Query,
    Header,
    Path,
    Body,
    FormData,
    Cookie,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Parameter {
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: Option<String>,
    #[serde(rename = "in", default, deserialize_with = "de::lenient")]
    pub location: Option<Location>,
    #[serde(rename = "type", default, deserialize_with = "de::lenient")]
    pub type_: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub description: Option<String>,
    #[serde(default)]
    pub schema: Option<Schema>,
}

impl Parameter {
    pub fn is_in(&self, location: Location) -> bool {
        self.location == Some(location)
    }

    /// `type` of a Swagger 2.0 parameter, or the inline schema type of an
    /// OpenAPI 3.x one.
    pub fn declared_type(&self) -> Option<&str> {
        self.type_
            .as_deref()
            .or_else(|| self.schema.as_ref().and_then(Schema::type_))
    }
}

#[cfg(test)]
mod test {
    use super::{Location, Parameter};
    use serde_json::json;

    #[test]
    fn parses_locations() {
        let p: Parameter =
            serde_json::from_value(json!({"name": "X-Trace", "in": "header"})).unwrap();
        assert!(p.is_in(Location::Header));
        let p: Parameter = serde_json::from_value(json!({"name": "f", "in": "formData"})).unwrap();
        assert!(p.is_in(Location::FormData));
        let p: Parameter = serde_json::from_value(json!({"name": "x", "in": "nowhere"})).unwrap();
        assert_eq!(p.location, None);
    }

    #[test]
    fn declared_type_falls_back_to_schema() {
        let p: Parameter = serde_json::from_value(json!({
            "name": "limit", "in": "query", "schema": {"type": "integer"}
        }))
        .unwrap();
        assert_eq!(p.declared_type(), Some("integer"));

        let p: Parameter = serde_json::from_value(json!({
            "name": "limit", "in": "query", "type": "number", "schema": {"type": "integer"}
        }))
        .unwrap();
        assert_eq!(p.declared_type(), Some("number"));

        let p: Parameter = serde_json::from_value(json!({"name": "q", "in": "query"})).unwrap();
        assert_eq!(p.declared_type(), None);
    }

    #[test]
    fn malformed_fields_are_dropped() {
        let p: Parameter = serde_json::from_value(json!({
            "name": ["not", "a", "name"], "in": "query", "description": 7
        }))
        .unwrap();
        assert_eq!(p.name, None);
        assert_eq!(p.description, None);
        assert!(p.is_in(Location::Query));
    }
}
