use openapi_http::convert::{self, Format};
use openapi_http::Error;

const PETSTORE_V2: &str = include_str!("fixtures/petstore-v2.yaml");
const USERS_V3: &str = include_str!("fixtures/users-v3.json");

#[test]
fn convert_swagger_yaml() {
    let http = convert::convert_str(PETSTORE_V2, Format::Yaml).expect("should convert petstore");
    let expected = [
        "###",
        "# List pets",
        "GET https://petstore.example.com/v1/pets",
        "X-Api-Key: ",
        "# Query: limit (integer) - How many items to return",
        "###",
        "# Create a pet",
        "POST https://petstore.example.com/v1/pets",
        "Content-Type: application/json",
        "",
        "{",
        "  \"name\": \"Rex\",",
        "  \"status\": \"available\",",
        "  \"owner\": {",
        "    \"id\": 0,",
        "    \"pets\": [",
        "      {",
        "        \"name\": \"Rex\",",
        "        \"status\": \"available\",",
        "        \"owner\": {}",
        "      }",
        "    ]",
        "  }",
        "}",
        "",
        "###",
        "# Deletes a pet",
        "DELETE https://petstore.example.com/v1/pets/{petId}",
    ]
    .join("\n");
    assert_eq!(http, expected);
}

#[test]
fn convert_openapi_json() {
    let http = convert::convert_str(USERS_V3, Format::Json).expect("should convert users");
    let expected = [
        "###",
        "# Create user",
        "POST https://api.users.test/v2/users",
        "X-Tenant: ",
        "# Query: dryRun (boolean) - ",
        "Content-Type: application/json",
        "",
        "{",
        "  \"id\": 0,",
        "  \"email\": \"user@example.com\",",
        "  \"roles\": [",
        "    \"admin\"",
        "  ],",
        "  \"active\": false",
        "}",
        "",
        "###",
        "# List users",
        "GET https://api.users.test/v2/users",
        "# Query: page (unknown) - Page number",
        "###",
        "PUT https://api.users.test/v2/users/{id}/avatar",
        "",
        "###",
        "POST https://api.users.test/v2/imports",
        "Content-Type: application/xml",
        "",
        "{",
        "  \"rows\": [",
        "    {",
        "      \"id\": 1",
        "    }",
        "  ]",
        "}",
        "",
    ]
    .join("\n");
    assert_eq!(http, expected);
}

#[test]
fn conversion_is_deterministic() {
    let first = convert::convert_str(USERS_V3, Format::Json).unwrap();
    let second = convert::convert_str(USERS_V3, Format::Json).unwrap();
    assert_eq!(first, second);
}

#[test]
fn json_documents_parse_as_yaml_too() {
    let from_json = convert::convert_str(USERS_V3, Format::Json).unwrap();
    let from_yaml = convert::convert_str(USERS_V3, Format::Yaml).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn convert_file_writes_next_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("petstore.yml");
    std::fs::write(&source, PETSTORE_V2).unwrap();

    let written = convert::convert_file(&source, None).expect("should write output");
    assert_eq!(written, dir.path().join("petstore.http"));

    let http = std::fs::read_to_string(&written).unwrap();
    assert!(http.starts_with("###\n# List pets\nGET https://petstore.example.com/v1/pets"));
    assert!(!http.ends_with('\n'));
}

#[test]
fn convert_file_to_explicit_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("users.json");
    let output = dir.path().join("requests.http");
    std::fs::write(&source, USERS_V3).unwrap();

    let written = convert::convert_file(&source, Some(&output)).unwrap();
    assert_eq!(written, output);
    assert!(!dir.path().join("users.http").exists());
}

#[test]
fn convert_file_rejects_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("tsconfig.json");
    assert!(matches!(
        convert::convert_file(&missing, None),
        Err(Error::UnsupportedFile { .. })
    ));

    let missing = dir.path().join("api.yaml");
    assert!(matches!(
        convert::convert_file(&missing, None),
        Err(Error::Io(_))
    ));
}
