use crate::{
    definitions::Definitions,
    schema::{Primitive, Schema, Shape},
    version::Dialect,
    Value,
};

use log::{trace, warn};
use std::collections::HashSet;

/// Synthesizes representative values from schema fragments, following `$ref`
/// pointers into the document's schema registry.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    definitions: &'a Definitions,
    dialect: Dialect,
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

impl<'a> Sampler<'a> {
    pub fn new(definitions: &'a Definitions, dialect: Dialect) -> Self {
        Self {
            definitions,
            dialect,
        }
    }

    pub fn resolve(&self, ref_: &str) -> Option<&'a Schema> {
        let schema = self.definitions.resolve(ref_, self.dialect);
        if schema.is_none() {
            warn!("unresolved reference `{ref_}`");
        }
        schema
    }

    /// Samples `schema` with a fresh set of visited references.
    pub fn sample_value(&self, schema: Option<&Schema>) -> Value {
        self.sample(schema, &mut HashSet::new())
    }

    /// `visited` holds every reference entered so far in this sampling run;
    /// meeting one again yields `{}`.
    pub fn sample(&self, schema: Option<&Schema>, visited: &mut HashSet<String>) -> Value {
        let schema = match schema {
            Some(Schema::Inline(schema)) => schema,
            Some(Schema::Reference(ref_)) => {
                if !visited.insert(ref_.clone()) {
                    trace!("reference cycle at `{ref_}`");
                    return empty_object();
                }
                return self.sample(self.resolve(ref_), visited);
            }
            None => return empty_object(),
        };

        if let Some(example) = &schema.example {
            return example.clone();
        }
        if let Some(default) = &schema.default {
            return default.clone();
        }

        match &schema.shape {
            Shape::Object(props) => {
                return Value::Object(
                    props
                        .iter()
                        .map(|(name, prop)| (name.clone(), self.sample(Some(prop), visited)))
                        .collect(),
                )
            }
            Shape::Array(items) => return Value::Array(vec![self.sample(Some(items), visited)]),
            _ => {}
        }

        if let Some(first) = schema.enum_.first() {
            return first.clone();
        }

        match schema.shape {
            Shape::Primitive(Primitive::String) => Value::String(String::new()),
            Shape::Primitive(Primitive::Integer | Primitive::Number) => Value::from(0),
            Shape::Primitive(Primitive::Boolean) => Value::Bool(false),
            _ => empty_object(),
        }
    }
}
