use crate::Value;

use serde::{de, Deserialize};

/// A JSON-Schema fragment as found under `definitions`, `components.schemas`,
/// body parameters and request body content.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    Reference(String),
    Inline(Box<SchemaObject>),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SchemaObject {
    pub type_: Option<String>,
    pub example: Option<Value>,
    pub default: Option<Value>,
    pub enum_: Vec<Value>,
    pub shape: Shape,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Shape {
    /// `type: object` with a `properties` mapping, in declaration order.
    Object(Vec<(String, Schema)>),
    /// `type: array` with `items`.
    Array(Box<Schema>),
    Primitive(Primitive),
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Integer,
    Number,
    Boolean,
}

impl Schema {
    /// Builds a schema from any document node. Never fails: nodes that are
    /// not mappings become an empty schema.
    pub fn from_value(v: &Value) -> Schema {
        let map = match v {
            Value::Object(map) => map,
            _ => return Schema::Inline(Box::default()),
        };

        if let Some(Value::String(ref_)) = map.get("$ref") {
            return Schema::Reference(ref_.to_string());
        }

        let type_ = map.get("type").and_then(Value::as_str);
        let shape = match type_ {
            Some("object") => match map.get("properties") {
                Some(Value::Object(props)) => Shape::Object(
                    props
                        .iter()
                        .map(|(name, prop)| (name.to_string(), Schema::from_value(prop)))
                        .collect(),
                ),
                _ => Shape::Unknown,
            },
            Some("array") => match map.get("items") {
                Some(Value::Null | Value::Bool(false)) | None => Shape::Unknown,
                Some(items) => Shape::Array(Box::new(Schema::from_value(items))),
            },
            Some("string") => Shape::Primitive(Primitive::String),
            Some("integer") => Shape::Primitive(Primitive::Integer),
            Some("number") => Shape::Primitive(Primitive::Number),
            Some("boolean") => Shape::Primitive(Primitive::Boolean),
            _ => Shape::Unknown,
        };

        let enum_ = match map.get("enum") {
            Some(Value::Array(values)) => values.clone(),
            _ => vec![],
        };

        Schema::Inline(Box::new(SchemaObject {
            type_: type_.map(str::to_string),
            example: map.get("example").cloned(),
            default: map.get("default").cloned(),
            enum_,
            shape,
        }))
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Schema::Reference(_))
    }

    pub fn reference(&self) -> Option<&str> {
        match self {
            Schema::Reference(ref_) => Some(ref_),
            Schema::Inline(_) => None,
        }
    }

    /// The raw `type` keyword of an inline schema.
    pub fn type_(&self) -> Option<&str> {
        match self {
            Schema::Reference(_) => None,
            Schema::Inline(schema) => schema.type_.as_deref(),
        }
    }
}

impl<'de> de::Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Schema, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let v: Value = de::Deserialize::deserialize(deserializer)?;
        Ok(Schema::from_value(&v))
    }
}
