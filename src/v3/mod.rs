//! OpenAPI 3.x documents.

use crate::{
    de,
    definitions::Definitions,
    operation::{MediaType, Operation},
    path::Paths,
    schema::Schema,
};

use serde::Deserialize;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Default, Clone, Deserialize)]
pub struct OpenApi {
    #[serde(default, deserialize_with = "de::lenient_seq")]
    pub servers: Vec<Server>,
    #[serde(default, deserialize_with = "de::lenient_or_default")]
    pub components: Components,
    #[serde(default)]
    pub paths: Paths,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Server {
    #[serde(default, deserialize_with = "de::lenient")]
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Components {
    #[serde(default, deserialize_with = "de::lenient_or_default")]
    pub schemas: Definitions,
}

impl OpenApi {
    pub fn base_url(&self) -> String {
        self.servers
            .first()
            .and_then(|server| server.url.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    pub fn request_content<'a>(&self, op: &'a Operation) -> Option<(&'a str, &'a MediaType)> {
        op.request_body.as_ref()?.select_content()
    }

    pub fn request_body_schema<'a>(&self, op: &'a Operation) -> Option<&'a Schema> {
        self.request_content(op)?.1.schema.as_ref()
    }
}
