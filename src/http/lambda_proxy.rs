use std::collections::HashMap;

use common::serializers::status_code::status_code_as_u16;
use http::StatusCode;
use serde::Serialize;
use serde_json::json;

/// Response in the shape expected by lambda proxy integrations and function URLs.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LambdaProxyHttpResponse {
    #[serde(serialize_with = "status_code_as_u16")]
    pub status_code: StatusCode,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl LambdaProxyHttpResponse {
    pub fn with_message(status_code: StatusCode, message: &str) -> Self {
        Self {
            status_code,
            body: json!({ "message": message }).to_string(),
            ..Self::default()
        }
    }
}

impl Default for LambdaProxyHttpResponse {
    fn default() -> Self {
        Self {
            status_code: StatusCode::OK,
            headers: HashMap::from([
                ("Access-Control-Allow-Origin".to_owned(), "*".to_owned()),
                ("Content-Type".to_owned(), "application/json".to_owned()),
            ]),
            body: String::new(),
        }
    }
}
