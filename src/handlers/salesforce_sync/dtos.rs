use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use model::sync_record::RawRecord;
use serde::Deserialize;

/// Function URL / API Gateway proxy event. Only the body is read.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotificationRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: Option<bool>,
}

/// Body posted by the Salesforce outbound call.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ChangeNotification {
    #[serde(rename = "EventTriggered")]
    pub event_triggered: String,
    #[serde(rename = "Data", default)]
    pub data: Vec<RawRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("request has no body")]
    MissingBody,
    #[error("body is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("body is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("body is not a valid change notification: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChangeNotificationRequest {
    /// The body is always base64 decoded first. A body that is not base64 is only read as
    /// plain JSON when the event declares `isBase64Encoded: false`.
    pub fn decode(&self) -> Result<ChangeNotification, DecodeError> {
        let body = self
            .body
            .as_deref()
            .filter(|body| !body.is_empty())
            .ok_or(DecodeError::MissingBody)?;

        let json = match STANDARD.decode(body) {
            Ok(bytes) => String::from_utf8(bytes)?,
            Err(_) if self.is_base64_encoded == Some(false) => body.to_owned(),
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChangeNotificationRequest, DecodeError};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use common::test_tools::salesforce::{
        change_notification, voice_prompt_records, INSERTED_TRIGGER, UPDATED_TRIGGER,
    };
    use rstest::rstest;
    use serde_json::json;

    fn request(body: Option<String>, is_base64_encoded: Option<bool>) -> ChangeNotificationRequest {
        ChangeNotificationRequest {
            body,
            is_base64_encoded,
        }
    }

    #[test]
    fn decodes_base64_bodies() {
        let body = change_notification(UPDATED_TRIGGER, voice_prompt_records(2)).to_string();

        let notification = request(Some(STANDARD.encode(body)), Some(true))
            .decode()
            .unwrap();

        assert_eq!(UPDATED_TRIGGER, notification.event_triggered);
        assert_eq!(2, notification.data.len());
        assert_eq!(Some("Voice_Prompt__c"), notification.data[0].object_type());
    }

    #[rstest]
    #[case::flagged(Some(false))]
    #[case::unflagged(None)]
    fn base64_bodies_are_decoded_whatever_the_flag(#[case] is_base64_encoded: Option<bool>) {
        let body = change_notification(INSERTED_TRIGGER, voice_prompt_records(1)).to_string();

        let notification = request(Some(STANDARD.encode(body)), is_base64_encoded)
            .decode()
            .unwrap();

        assert_eq!(INSERTED_TRIGGER, notification.event_triggered);
        assert_eq!(1, notification.data.len());
    }

    #[test]
    fn plain_bodies_are_accepted_when_declared() {
        let body = change_notification(UPDATED_TRIGGER, voice_prompt_records(1)).to_string();

        let notification = request(Some(body), Some(false)).decode().unwrap();

        assert_eq!(1, notification.data.len());
    }

    #[test]
    fn missing_data_is_empty() {
        let body = json!({ "EventTriggered": UPDATED_TRIGGER }).to_string();

        let notification = request(Some(STANDARD.encode(body)), None).decode().unwrap();

        assert!(notification.data.is_empty());
    }

    #[test]
    fn proxy_events_deserialize() {
        let request: ChangeNotificationRequest = serde_json::from_value(json!({
            "version": "2.0",
            "rawPath": "/",
            "body": "e30=",
            "isBase64Encoded": true,
        }))
        .unwrap();

        assert_eq!(Some("e30=".to_owned()), request.body);
        assert_eq!(Some(true), request.is_base64_encoded);
    }

    #[rstest]
    #[case::missing(None, None)]
    #[case::empty(Some(String::new()), Some(true))]
    fn missing_body(#[case] body: Option<String>, #[case] is_base64_encoded: Option<bool>) {
        let error = request(body, is_base64_encoded).decode().unwrap_err();

        assert!(matches!(error, DecodeError::MissingBody));
    }

    #[test]
    fn invalid_base64() {
        let error = request(Some("not base64!".to_owned()), Some(true))
            .decode()
            .unwrap_err();

        assert!(matches!(error, DecodeError::Base64(_)));
    }

    #[test]
    fn invalid_utf8() {
        let error = request(Some(STANDARD.encode([0xff, 0xfe, 0xfd])), Some(true))
            .decode()
            .unwrap_err();

        assert!(matches!(error, DecodeError::Utf8(_)));
    }

    #[rstest]
    #[case::not_json("hello")]
    #[case::data_not_a_list(r#"{"EventTriggered":"Record Updated","Data":{"Name":"x"}}"#)]
    #[case::no_trigger(r#"{"Data":[]}"#)]
    fn invalid_json(#[case] body: &str) {
        let error = request(Some(STANDARD.encode(body)), Some(true))
            .decode()
            .unwrap_err();

        assert!(matches!(error, DecodeError::Json(_)));
    }
}
