use crate::{
    definitions::Definitions,
    operation::{MediaType, Operation},
    path::Paths,
    schema::Schema,
    v2::Swagger,
    v3::OpenApi,
    version::{self, Dialect},
    Error, Result, Value,
};

/// A parsed document of either dialect. Everything that differs between
/// Swagger 2.0 and OpenAPI 3.x goes through here.
#[derive(Debug, Clone)]
pub enum Spec {
    V2(Swagger),
    V3(OpenApi),
}

impl Spec {
    /// Detects the dialect and builds the matching document model.
    pub fn from_value(doc: Value) -> Result<Spec> {
        if !doc.get("paths").map_or(false, Value::is_object) {
            return Err(Error::MissingPaths);
        }
        let dialect = version::detect(&doc)?;
        Spec::with_dialect(doc, dialect)
    }

    pub fn with_dialect(doc: Value, dialect: Dialect) -> Result<Spec> {
        let spec = match dialect {
            Dialect::V2 => Spec::V2(serde_json::from_value(doc)?),
            Dialect::V3 => Spec::V3(serde_json::from_value(doc)?),
        };
        Ok(spec)
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Spec::V2(_) => Dialect::V2,
            Spec::V3(_) => Dialect::V3,
        }
    }

    pub fn paths(&self) -> &Paths {
        match self {
            Spec::V2(swagger) => &swagger.paths,
            Spec::V3(openapi) => &openapi.paths,
        }
    }

    pub fn base_url(&self) -> String {
        match self {
            Spec::V2(swagger) => swagger.base_url(),
            Spec::V3(openapi) => openapi.base_url(),
        }
    }

    pub fn definitions(&self) -> &Definitions {
        match self {
            Spec::V2(swagger) => &swagger.definitions,
            Spec::V3(openapi) => &openapi.components.schemas,
        }
    }

    pub fn request_body_schema<'a>(&self, op: &'a Operation) -> Option<&'a Schema> {
        match self {
            Spec::V2(swagger) => swagger.request_body_schema(op),
            Spec::V3(openapi) => openapi.request_body_schema(op),
        }
    }

    /// Selected request body content with its MIME type. Swagger 2.0 has no
    /// content map.
    pub fn request_content<'a>(&self, op: &'a Operation) -> Option<(&'a str, &'a MediaType)> {
        match self {
            Spec::V2(_) => None,
            Spec::V3(openapi) => openapi.request_content(op),
        }
    }
}
