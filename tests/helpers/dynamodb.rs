use std::collections::HashMap;

use rusoto_dynamodb::{AttributeValue, BatchWriteItemInput, WriteRequest};

pub fn string_attribute(value: &str) -> AttributeValue {
    AttributeValue {
        s: Some(value.to_owned()),
        ..AttributeValue::default()
    }
}

pub fn requests_for<'a>(input: &'a BatchWriteItemInput, table_name: &str) -> &'a [WriteRequest] {
    input
        .request_items
        .get(table_name)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

pub fn put_items(requests: &[WriteRequest]) -> Vec<&HashMap<String, AttributeValue>> {
    requests
        .iter()
        .filter_map(|request| request.put_request.as_ref())
        .map(|put| &put.item)
        .collect()
}
