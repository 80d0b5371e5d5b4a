use serde::Deserialize;

use super::number::deserialize_count;
use crate::domain::{CreditTransfer, CreditTransferResult, CreditTransferTarget};

pub const CREDITS_RESOURCE: &str = "credits";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[derive(Debug, Clone, Deserialize)]
struct CreditsXmlResponse {
    #[serde(default, deserialize_with = "deserialize_count")]
    credits: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct CreditTransferXmlResponse {
    #[serde(default, deserialize_with = "deserialize_count")]
    source_credits_before: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    source_credits_after: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    target_credits_before: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    target_credits_after: i64,
}

pub fn encode_transfer_credits_form(request: &CreditTransfer) -> Vec<(String, String)> {
    let mut params = vec![("quantity".to_owned(), request.quantity.to_string())];
    match &request.target {
        CreditTransferTarget::Account(account) => {
            params.push(("target".to_owned(), account.clone()));
        }
        CreditTransferTarget::User { username, password } => {
            params.push(("target_username".to_owned(), username.clone()));
            params.push(("target_password".to_owned(), password.clone()));
        }
    }
    params
}

/// Available credits; a missing or empty `credits` element means zero.
pub fn decode_credits_xml_response(xml: &str) -> Result<i64, TransportError> {
    let parsed: CreditsXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(parsed.credits)
}

pub fn decode_credit_transfer_xml_response(
    xml: &str,
) -> Result<CreditTransferResult, TransportError> {
    let parsed: CreditTransferXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(CreditTransferResult {
        source_credits_before: parsed.source_credits_before,
        source_credits_after: parsed.source_credits_after,
        target_credits_before: parsed.target_credits_before,
        target_credits_after: parsed.target_credits_after,
    })
}
