pub mod convert;
pub mod definitions;
pub mod error;
pub mod generator;
pub mod operation;
pub mod parameter;
pub mod path;
pub mod sampler;
pub mod schema;
pub mod spec;
pub mod v2;
pub mod v3;
pub mod version;

mod de;

pub use error::{Error, Result};
pub use serde_json::Value;
