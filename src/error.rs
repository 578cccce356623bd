use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("`{file}` is not an OpenAPI/Swagger file: {reason}")]
    UnsupportedFile { file: String, reason: &'static str },

    #[error("failed to parse YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document has no valid `paths` object")]
    MissingPaths,

    #[error("cannot detect OpenAPI/Swagger version")]
    UnrecognizedVersion,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
