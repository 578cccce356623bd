use crate::{definitions, Error, Result, Value};

use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Swagger 2.0
    V2,
    /// OpenAPI 3.x
    V3,
}

impl Dialect {
    /// Prefix of a `$ref` pointing into this dialect's schema registry.
    pub fn schema_ref_prefix(&self) -> &'static str {
        match self {
            Dialect::V2 => definitions::DEFINITIONS_REF,
            Dialect::V3 => definitions::COMPONENTS_REF,
        }
    }

    pub fn is_v3(&self) -> bool {
        *self == Dialect::V3
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::V2 => write!(f, "Swagger 2.0"),
            Dialect::V3 => write!(f, "OpenAPI 3.x"),
        }
    }
}

fn field(v: Option<&Value>) -> Option<&Value> {
    v.filter(|v| !v.is_null())
}

/// Classifies a parsed document by its `openapi`, `swagger` or `info.version`
/// field, whichever is set first.
pub fn detect(doc: &Value) -> Result<Dialect> {
    let openapi = field(doc.get("openapi"));
    let swagger = field(doc.get("swagger"));
    let version = openapi
        .or(swagger)
        .or_else(|| field(doc.pointer("/info/version")));

    let (is_v3, is_v2) = match version {
        Some(Value::String(v)) => (v.starts_with('3'), v.starts_with('2')),
        _ => (openapi.is_some(), swagger.is_some()),
    };

    let dialect = if is_v3 {
        Dialect::V3
    } else if is_v2 {
        Dialect::V2
    } else {
        return Err(Error::UnrecognizedVersion);
    };
    debug!("detected {dialect} document");
    Ok(dialect)
}

#[cfg(test)]
mod test {
    use super::{detect, Dialect};
    use crate::Error;
    use serde_json::json;

    #[test]
    fn detects_version_strings() {
        assert_eq!(detect(&json!({"openapi": "3.0.1"})).unwrap(), Dialect::V3);
        assert_eq!(detect(&json!({"swagger": "2.0"})).unwrap(), Dialect::V2);
        assert_eq!(detect(&json!({"openapi": "2.0"})).unwrap(), Dialect::V2);
        assert_eq!(
            detect(&json!({"info": {"version": "3.1"}})).unwrap(),
            Dialect::V3
        );
    }

    #[test]
    fn openapi_field_takes_priority() {
        let doc = json!({"openapi": "3.0.0", "swagger": "2.0", "info": {"version": "2.1"}});
        assert_eq!(detect(&doc).unwrap(), Dialect::V3);
    }

    #[test]
    fn non_string_fields_count_by_presence() {
        assert_eq!(detect(&json!({"swagger": 2.0})).unwrap(), Dialect::V2);
        assert_eq!(detect(&json!({"openapi": 3})).unwrap(), Dialect::V3);
    }

    #[test]
    fn unrecognized_versions() {
        for doc in [
            json!({}),
            json!({"info": {"version": "1.0.0"}}),
            json!({"openapi": "4.0"}),
            json!({"openapi": null, "info": {"version": 3}}),
        ] {
            assert!(matches!(detect(&doc), Err(Error::UnrecognizedVersion)));
        }
    }
}
