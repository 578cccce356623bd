use crate::{schema::Schema, version::Dialect};

use serde::Deserialize;
use std::collections::HashMap;

pub const DEFINITIONS_REF: &str = "#/definitions/";
pub const COMPONENTS_REF: &str = "#/components/schemas/";

/// Named schemas that `$ref` pointers resolve against: `definitions` in
/// Swagger 2.0, `components.schemas` in OpenAPI 3.x.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Definitions(pub HashMap<String, Schema>);

impl Definitions {
    /// Looks up the schema a reference points at. References carrying another
    /// dialect's prefix, or naming a missing schema, resolve to nothing.
    pub fn resolve(&self, ref_: &str, dialect: Dialect) -> Option<&Schema> {
        let name = ref_.strip_prefix(dialect.schema_ref_prefix())?;
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
