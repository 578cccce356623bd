use crate::{operation::Operation, Value};

use log::trace;
use serde::{de, Deserialize};

pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Routes in document order.
#[derive(Debug, Default, Clone)]
pub struct Paths(pub Vec<(String, PathItem)>);

/// Operations of one route keyed by method, in document order.
#[derive(Debug, Default, Clone)]
pub struct PathItem(pub Vec<(String, Operation)>);

fn is_http_method(key: &str) -> bool {
    HTTP_METHODS.iter().any(|m| m.eq_ignore_ascii_case(key))
}

impl<'de> de::Deserialize<'de> for Paths {
    fn deserialize<D>(deserializer: D) -> Result<Paths, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let v: Value = de::Deserialize::deserialize(deserializer)?;

        match v {
            Value::Object(map) => {
                let paths = map
                    .into_iter()
                    .filter_map(|(route, val)| {
                        if route.starts_with("x-") {
                            trace!("skipping extension `{route}`");
                            None
                        } else {
                            Some((route, PathItem::from_value(val)))
                        }
                    })
                    .collect();
                Ok(Paths(paths))
            }
            v => Err(de::Error::custom(format!(
                "invalid object for paths `{:?}`",
                v
            ))),
        }
    }
}

impl PathItem {
    fn from_value(v: Value) -> PathItem {
        match v {
            Value::Object(map) => PathItem(
                map.into_iter()
                    .filter(|(key, _)| is_http_method(key))
                    .filter_map(|(method, op)| {
                        serde_json::from_value(op).ok().map(|op| (method, op))
                    })
                    .collect(),
            ),
            _ => PathItem::default(),
        }
    }
}

impl Paths {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn operations(&self) -> impl Iterator<Item = (&str, &str, &Operation)> {
        self.0.iter().flat_map(|(route, item)| {
            item.0
                .iter()
                .map(move |(method, op)| (route.as_str(), method.as_str(), op))
        })
    }
}
