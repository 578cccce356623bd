use crate::{
    operation::{Operation, JSON_MIME},
    parameter::Location,
    sampler::Sampler,
    schema::Schema,
    spec::Spec,
    Value,
};

use log::{debug, trace};

pub const BLOCK_SEPARATOR: &str = "###";

/// Methods whose blocks carry a request body.
const BODY_METHODS: [&str; 3] = ["post", "put", "patch"];

/// Emits one request block per route and method of a document.
pub struct HttpGenerator<'a> {
    spec: &'a Spec,
    sampler: Sampler<'a>,
}

impl<'a> HttpGenerator<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self {
            spec,
            sampler: Sampler::new(spec.definitions(), spec.dialect()),
        }
    }

    pub fn generate(&self) -> Vec<String> {
        let base_url = self.spec.base_url();
        debug!("generating requests against `{base_url}`");

        let mut lines = vec![];
        for (route, method, op) in self.spec.paths().operations() {
            trace!("handling {method} {route}");
            self.generate_request(&base_url, route, method, op, &mut lines);
        }
        lines
    }

    fn generate_request(
        &self,
        base_url: &str,
        route: &str,
        method: &str,
        op: &Operation,
        lines: &mut Vec<String>,
    ) {
        lines.push(BLOCK_SEPARATOR.to_string());
        for comment in [&op.summary, &op.description].into_iter().flatten() {
            if !comment.is_empty() {
                lines.push(format!("# {comment}"));
            }
        }
        lines.push(format!("{} {base_url}{route}", method.to_uppercase()));

        for header in op.parameters_in(Location::Header) {
            if let Some(name) = &header.name {
                lines.push(format!("{name}: "));
            }
        }
        for query in op.parameters_in(Location::Query) {
            if let Some(name) = &query.name {
                lines.push(format!(
                    "# Query: {name} ({}) - {}",
                    query.declared_type().unwrap_or("unknown"),
                    query.description.as_deref().unwrap_or_default(),
                ));
            }
        }

        if BODY_METHODS.iter().any(|m| m.eq_ignore_ascii_case(method)) {
            match self.request_body(op) {
                (content_type, Value::Object(body)) if !body.is_empty() => {
                    lines.push(format!("Content-Type: {content_type}"));
                    lines.push(String::new());
                    let body = format!("{:#}", Value::Object(body));
                    lines.extend(body.lines().map(str::to_string));
                }
                _ => trace!("no request body for {method} {route}"),
            }
            lines.push(String::new());
        }
    }

    /// Content type and sample body of an operation. The body is sampled from
    /// the request schema when there is one, else taken from the examples
    /// declared on the selected content entry.
    fn request_body<'o>(&self, op: &'o Operation) -> (&'o str, Value) {
        let content = self.spec.request_content(op);
        let content_type = content.map(|(mime, _)| mime).unwrap_or(JSON_MIME);

        let body = match self.spec.request_body_schema(op) {
            Some(Schema::Reference(ref_)) => self.sampler.sample_value(self.sampler.resolve(ref_)),
            Some(schema) => self.sampler.sample_value(Some(schema)),
            None => match content {
                Some((_, media)) => media.declared_example(),
                None => Value::Object(Default::default()),
            },
        };
        (content_type, body)
    }
}
