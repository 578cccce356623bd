//! File-level conversion: deciding whether a file is an API document, parsing
//! it and writing the generated requests next to it.

use crate::{generator::HttpGenerator, spec::Spec, Error, Result, Value};

use log::{debug, info};
use std::path::{Path, PathBuf};

pub const OUTPUT_EXTENSION: &str = "http";

const IGNORED_FILES: [&str; 23] = [
    "package.json",
    "tsconfig.json",
    "jsconfig.json",
    "settings.json",
    "launch.json",
    "tasks.json",
    "global.json",
    "appsettings.json",
    "config.json",
    "webpack.config.js",
    "webpack.config.json",
    "vite.config.js",
    "vite.config.json",
    "babel.config.js",
    "babel.config.json",
    "eslint.json",
    "eslint.yaml",
    "eslint.yml",
    "prettier.json",
    "prettier.yaml",
    "prettier.yml",
    "docker-compose.yml",
    "docker-compose.yaml",
];

const IGNORED_KEYWORDS: [&str; 7] = [
    "config",
    "setting",
    "package",
    "tsconfig",
    "jsconfig",
    "appsettings",
    "docker-compose",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

/// Rejects well-known tool configuration files and anything that is not JSON
/// or YAML, returning the format to parse the file with.
pub fn check_file(path: &Path) -> Result<Format> {
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let unsupported = |reason| Error::UnsupportedFile {
        file: file.clone(),
        reason,
    };

    if IGNORED_FILES.contains(&file.as_str()) || IGNORED_KEYWORDS.iter().any(|kw| file.contains(kw))
    {
        return Err(unsupported("looks like a tool configuration file"));
    }

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match extension.as_deref() {
        Some("json") => Ok(Format::Json),
        Some("yaml" | "yml") => Ok(Format::Yaml),
        _ => Err(unsupported("expected a .yaml, .yml or .json file")),
    }
}

pub fn parse_document(text: &str, format: Format) -> Result<Value> {
    let doc = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => yaml_to_json(serde_yaml::from_str(text)?),
    };
    Ok(doc)
}

/// Converts a YAML tree into the JSON document model. Scalar mapping keys
/// such as status codes become their string form; other keys are dropped.
fn yaml_to_json(v: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match v {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(n) = n.as_i64() {
                Value::from(n)
            } else if let Some(n) = n.as_u64() {
                Value::from(n)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(map) => Value::Object(
            map.into_iter()
                .filter_map(|(key, val)| Some((yaml_key(key)?, yaml_to_json(val))))
                .collect(),
        ),
    }
}

fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => Some(s),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Null => Some("null".to_string()),
        Yaml::Number(n) => match yaml_to_json(Yaml::Number(n)) {
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        },
        Yaml::Sequence(_) | Yaml::Mapping(_) => None,
    }
}

/// Runs the whole pipeline on a parsed document.
pub fn convert_document(doc: Value) -> Result<Vec<String>> {
    let spec = Spec::from_value(doc)?;
    let lines = HttpGenerator::new(&spec).generate();
    debug!("generated {} lines", lines.len());
    Ok(lines)
}

/// Converts document text, returning the content of the request file.
pub fn convert_str(text: &str, format: Format) -> Result<String> {
    let doc = parse_document(text, format)?;
    Ok(convert_document(doc)?.join("\n"))
}

/// The request file written for `source`: same name, `.http` extension.
pub fn output_path(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}

/// Converts the document at `source` and writes the result to `output`, or
/// next to the source when not given. Returns the path written.
pub fn convert_file(source: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let format = check_file(source)?;
    let text = std::fs::read_to_string(source)?;
    let http = convert_str(&text, format)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output_path(source));
    std::fs::write(&output, http)?;
    info!("generated {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod test {
    use super::{check_file, convert_str, output_path, parse_document, Format};
    use crate::Error;
    use serde_json::json;
    use std::path::{Path, PathBuf};

    #[test]
    fn accepts_api_documents() {
        assert_eq!(check_file(Path::new("api/petstore.yaml")).unwrap(), Format::Yaml);
        assert_eq!(check_file(Path::new("openapi.YML")).unwrap(), Format::Yaml);
        assert_eq!(check_file(Path::new("/tmp/Swagger.JSON")).unwrap(), Format::Json);
    }

    #[test]
    fn rejects_configuration_files() {
        for path in [
            "package.json",
            "docker-compose.yml",
            "app/AppSettings.Development.json",
            "my-config.yaml",
            "user_settings.yml",
            "eslint.yaml",
        ] {
            assert!(
                matches!(check_file(Path::new(path)), Err(Error::UnsupportedFile { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_other_extensions() {
        for path in ["api.txt", "openapi", "spec.yaml.bak"] {
            assert!(matches!(
                check_file(Path::new(path)),
                Err(Error::UnsupportedFile { .. })
            ));
        }
    }

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(
            output_path(Path::new("specs/petstore.v2.yaml")),
            PathBuf::from("specs/petstore.v2.http")
        );
        assert_eq!(output_path(Path::new("api.json")), PathBuf::from("api.http"));
    }

    #[test]
    fn yaml_keys_become_strings() {
        let doc = parse_document(
            "paths:\n  /a:\n    get:\n      responses:\n        200:\n          description: ok\n        true: 1\n",
            Format::Yaml,
        )
        .unwrap();
        assert_eq!(
            doc,
            json!({"paths": {"/a": {"get": {"responses": {
                "200": {"description": "ok"},
                "true": 1
            }}}}})
        );
    }

    #[test]
    fn parse_failures() {
        assert!(matches!(
            parse_document("{\"paths\": ", Format::Json),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            parse_document("paths: [unclosed", Format::Yaml),
            Err(Error::Yaml(_))
        ));
    }

    #[test]
    fn pipeline_errors() {
        assert!(matches!(
            convert_str("openapi: 3.0.0\ninfo:\n  title: x\n", Format::Yaml),
            Err(Error::MissingPaths)
        ));
        assert!(matches!(
            convert_str(r#"{"paths": {}, "info": {"version": "1.0"}}"#, Format::Json),
            Err(Error::UnrecognizedVersion)
        ));
    }

    #[test]
    fn swagger_float_version() {
        let http = convert_str(
            "swagger: 2.0\nhost: api.test\npaths:\n  /ping:\n    get:\n      summary: Ping\n",
            Format::Yaml,
        )
        .unwrap();
        assert_eq!(http, "###\n# Ping\nGET http://api.test/ping");
    }
}
