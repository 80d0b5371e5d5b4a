use serde::Deserialize;

use super::number::deserialize_count;
use super::path::resource;
use super::time::render_gateway_time;
use crate::domain::{DeleteResult, ScheduledId, SendResult, SendSms, ValidationError};

pub const SMS_RESOURCE: &str = "sms";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[derive(Debug, Clone, Deserialize)]
struct SendSmsXmlResponse {
    #[serde(default, deserialize_with = "deserialize_count")]
    message_id: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    scheduled_id: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    credits_used: u64,
    status: String,
}

#[derive(Debug, Clone, Deserialize)]
struct DeleteSmsXmlResponse {
    #[serde(default, deserialize_with = "deserialize_count")]
    scheduled_id: u64,
    status: String,
}

/// Every field is sent, empty when the caller left it out.
pub fn encode_send_sms_form(request: &SendSms) -> Result<Vec<(String, String)>, ValidationError> {
    let options = request.options();
    let schedule = options
        .schedule
        .as_ref()
        .map(render_gateway_time)
        .transpose()?
        .unwrap_or_default();

    Ok(vec![
        ("message".to_owned(), request.message().to_owned()),
        ("mobile_number".to_owned(), request.mobile_number().to_owned()),
        ("originator".to_owned(), request.originator().to_owned()),
        ("validity".to_owned(), options.validity.to_string()),
        ("email".to_owned(), options.email.clone().unwrap_or_default()),
        ("custom".to_owned(), options.custom.clone().unwrap_or_default()),
        ("schedule".to_owned(), schedule),
    ])
}

pub fn delete_sms_resource(scheduled_id: &ScheduledId) -> String {
    resource(SMS_RESOURCE, [scheduled_id.as_str()])
}

pub fn decode_send_sms_xml_response(xml: &str) -> Result<SendResult, TransportError> {
    let parsed: SendSmsXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(SendResult {
        message_id: parsed.message_id,
        scheduled_id: parsed.scheduled_id,
        credits_used: parsed.credits_used,
        status: parsed.status,
    })
}

pub fn decode_delete_sms_xml_response(xml: &str) -> Result<DeleteResult, TransportError> {
    let parsed: DeleteSmsXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(DeleteResult {
        scheduled_id: parsed.scheduled_id,
        status: parsed.status,
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::{GatewayTime, SendOptions};

    use super::*;

    fn field<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn encode_sends_every_field_even_when_empty() {
        let request = SendSms::new("hello", "447000000001", "Acme", SendOptions::default());
        let params = encode_send_sms_form(&request).unwrap();

        assert_eq!(
            params,
            vec![
                ("message".to_owned(), "hello".to_owned()),
                ("mobile_number".to_owned(), "447000000001".to_owned()),
                ("originator".to_owned(), "Acme".to_owned()),
                ("validity".to_owned(), "72".to_owned()),
                ("email".to_owned(), String::new()),
                ("custom".to_owned(), String::new()),
                ("schedule".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn encode_renders_numeric_schedule_in_london_time() {
        let options = SendOptions {
            validity: 24,
            email: Some("ops@example.com".to_owned()),
            custom: Some("campaign-7".to_owned()),
            schedule: Some(GatewayTime::Unix(1_700_000_000)),
        };
        let request = SendSms::new("hello", "447000000001", "Acme", options);
        let params = encode_send_sms_form(&request).unwrap();

        assert_eq!(field(&params, "schedule"), Some("2023-11-14T22:13:20+00:00"));
        assert_eq!(field(&params, "validity"), Some("24"));
        assert_eq!(field(&params, "email"), Some("ops@example.com"));
        assert_eq!(field(&params, "custom"), Some("campaign-7"));
    }

    #[test]
    fn encode_passes_text_schedule_through() {
        let options = SendOptions {
            schedule: Some(GatewayTime::from("2030-01-01T09:00:00+00:00")),
            ..Default::default()
        };
        let request = SendSms::new("hello", "447000000001", "Acme", options);
        let params = encode_send_sms_form(&request).unwrap();

        assert_eq!(field(&params, "schedule"), Some("2030-01-01T09:00:00+00:00"));
    }

    #[test]
    fn delete_resource_escapes_scheduled_id() {
        let id = ScheduledId::new("12/34").unwrap();
        assert_eq!(delete_sms_resource(&id), "sms/12%2F34");
    }

    #[test]
    fn decode_send_response() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <response processed_date="2023-11-14T22:13:20+00:00">
          <message_id>3501235648</message_id>
          <scheduled_id>0</scheduled_id>
          <credits_used>1</credits_used>
          <status>SENT</status>
        </response>"#;

        let parsed = decode_send_sms_xml_response(xml).unwrap();
        assert_eq!(
            parsed,
            SendResult {
                message_id: 3_501_235_648,
                scheduled_id: 0,
                credits_used: 1,
                status: "SENT".to_owned(),
            }
        );
    }

    #[test]
    fn decode_delete_response() {
        let xml = r#"<response>
          <scheduled_id>5436</scheduled_id>
          <status>DELETED</status>
        </response>"#;

        let parsed = decode_delete_sms_xml_response(xml).unwrap();
        assert_eq!(parsed.scheduled_id, 5436);
        assert_eq!(parsed.status, "DELETED");
    }

    #[test]
    fn decode_send_response_without_status_fails() {
        assert!(decode_send_sms_xml_response("<response><message_id>1</message_id></response>").is_err());
    }

    #[test]
    fn decode_scheduled_send_with_blank_message_id() {
        let xml = r#"<response>
          <message_id/>
          <scheduled_id>5436</scheduled_id>
          <credits_used>2</credits_used>
          <status>SCHEDULED</status>
        </response>"#;

        let parsed = decode_send_sms_xml_response(xml).unwrap();
        assert_eq!(parsed.message_id, 0);
        assert_eq!(parsed.scheduled_id, 5436);
        assert_eq!(parsed.credits_used, 2);
    }
}
