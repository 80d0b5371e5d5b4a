use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML error body: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayErrorEntry {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorsXmlResponse {
    #[serde(default)]
    errors: Option<ErrorsXml>,
}

#[derive(Debug, Deserialize)]
struct ErrorsXml {
    #[serde(default)]
    error: Vec<ErrorXml>,
}

#[derive(Debug, Deserialize)]
struct ErrorXml {
    #[serde(rename = "@code")]
    code: i32,
    #[serde(rename = "$text", default)]
    message: String,
}

/// Decode the `<errors>` list carried by HTTP 400 responses, in document order.
pub fn decode_errors_xml_response(xml: &str) -> Result<Vec<GatewayErrorEntry>, TransportError> {
    let parsed: ErrorsXmlResponse = quick_xml::de::from_str(xml)?;
    let entries = parsed
        .errors
        .map(|errors| errors.error)
        .unwrap_or_default()
        .into_iter()
        .map(|error| GatewayErrorEntry {
            code: error.code,
            message: error.message,
        })
        .collect();
    Ok(entries)
}
