/*
[INPUT]:  Endpoint method, path, query and optional JSON payload
[OUTPUT]: Immutable request descriptor replayable by the pipeline
[POS]:    HTTP layer - per-call request description
[UPDATE]: When requests need new parts (headers, form bodies)
*/

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use serde::Serialize;

use crate::http::Result;

/// One logical API call.
///
/// The body is encoded once up front so a retry re-sends identical bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn post_json<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        Self::new(Method::POST, path).with_json(body)
    }

    pub fn put_json<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        Self::new(Method::PUT, path).with_json(body)
    }

    pub fn patch_json<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        Self::new(Method::PATCH, path).with_json(body)
    }

    /// Attach a JSON body
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Short label used in logs and error context, e.g. `GET meetings/123`
    pub fn endpoint(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path.trim_start_matches('/'))
    }
}

/// Encode one path segment.
///
/// Past-meeting UUIDs starting with `/` or containing `//` must be encoded
/// twice or the API misroutes them.
pub fn encode_meeting_uuid(uuid: &str) -> String {
    let once = encode_segment(uuid);
    if uuid.starts_with('/') || uuid.contains("//") {
        encode_segment(&once)
    } else {
        once
    }
}

/// Everything except RFC 3986 unreserved characters
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_json_encodes_body() {
        let request = ApiRequest::post_json("meetings/1/polls", &json!({"title": "Q"})).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body.as_deref(), Some(br#"{"title":"Q"}"#.as_slice()));
    }

    #[test]
    fn test_get_has_no_body() {
        let request = ApiRequest::get("meetings/1");
        assert!(request.body.is_none());
        assert_eq!(request.endpoint(), "GET meetings/1");
    }

    #[test]
    fn test_encode_plain_uuid_once() {
        assert_eq!(encode_meeting_uuid("4444AAAiAAAAAiAiAiiAii=="), "4444AAAiAAAAAiAiAiiAii%3D%3D");
    }

    #[test]
    fn test_encode_slash_uuid_twice() {
        assert_eq!(encode_meeting_uuid("/ajXp112QmuoKj4854875=="), "%252FajXp112QmuoKj4854875%253D%253D");
        assert_eq!(encode_meeting_uuid("ab//cd"), "ab%252F%252Fcd");
    }

    #[test]
    fn test_encode_segment_uses_path_escapes() {
        assert_eq!(encode_segment("a b"), "a%20b");
        assert_eq!(encode_segment("a+b"), "a%2Bb");
        assert_eq!(encode_segment("host@example.com"), "host%40example.com");
        assert_eq!(encode_segment("x-y_z.~"), "x-y_z.~");
    }
}
