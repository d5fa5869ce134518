use http::StatusCode;
use serde::Serializer;

/// Serializes a status code as its numeric value, the way lambda proxy integrations expect it.
pub fn status_code_as_u16<S>(status_code: &StatusCode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u16(status_code.as_u16())
}
