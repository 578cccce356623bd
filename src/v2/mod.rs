//! Swagger 2.0 documents.

use crate::{
    de,
    definitions::Definitions,
    operation::Operation,
    parameter::{Location, Parameter},
    path::Paths,
    schema::Schema,
};

use serde::Deserialize;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "localhost";

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Swagger {
    #[serde(default, deserialize_with = "de::lenient")]
    pub host: Option<String>,
    #[serde(rename = "basePath", default, deserialize_with = "de::lenient")]
    pub base_path: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_seq")]
    pub schemes: Vec<String>,
    #[serde(default, deserialize_with = "de::lenient_or_default")]
    pub definitions: Definitions,
    #[serde(default)]
    pub paths: Paths,
}

impl Swagger {
    /// `scheme://host/basePath` from the first declared scheme.
    pub fn base_url(&self) -> String {
        let scheme = self
            .schemes
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_SCHEME);
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let base_path = self.base_path.as_deref().unwrap_or_default();
        format!("{scheme}://{host}{base_path}")
    }

    /// Schema of the first `in: body` parameter.
    pub fn request_body_schema<'a>(&self, op: &'a Operation) -> Option<&'a Schema> {
        op.parameters_in(Location::Body)
            .next()
            .and_then(|p: &Parameter| p.schema.as_ref())
    }
}
