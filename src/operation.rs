use crate::{
    de,
    parameter::{Location, Parameter},
    schema::Schema,
    Value,
};

use serde::Deserialize;

pub const JSON_MIME: &str = "application/json";

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Operation {
    #[serde(default, deserialize_with = "de::lenient")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_seq")]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "requestBody", default, deserialize_with = "de::lenient")]
    pub request_body: Option<RequestBody>,
}

impl Operation {
    pub fn parameters_in(&self, location: Location) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(move |p| p.is_in(location))
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RequestBody {
    #[serde(default, deserialize_with = "de::lenient_map")]
    pub content: Vec<(String, MediaType)>,
}

impl RequestBody {
    /// The first content entry whose MIME type mentions JSON, or the first
    /// declared one.
    pub fn select_content(&self) -> Option<(&str, &MediaType)> {
        self.content
            .iter()
            .find(|(mime, _)| mime.to_lowercase().contains("json"))
            .or_else(|| self.content.first())
            .map(|(mime, media)| (mime.as_str(), media))
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct MediaType {
    #[serde(default)]
    pub schema: Option<Schema>,
    #[serde(default, deserialize_with = "de::present")]
    pub example: Option<Value>,
    #[serde(default, deserialize_with = "de::lenient_map")]
    pub examples: Vec<(String, Value)>,
}

impl MediaType {
    /// Sample taken from the declared `example`, else from the first entry
    /// of `examples`.
    pub fn declared_example(&self) -> Value {
        if let Some(example) = self.example.as_ref().filter(|v| de::is_truthy(v)) {
            return example.clone();
        }
        match self.examples.first() {
            Some((_, Value::Object(example))) => example
                .get("value")
                .cloned()
                .unwrap_or_else(|| Value::Object(Default::default())),
            _ => Value::Object(Default::default()),
        }
    }
}
