use serde::Deserialize;

use super::flag::decode_flag;
use super::path::resource;
use crate::domain::{Keyword, KeywordAvailability};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[derive(Debug, Clone, Deserialize)]
struct KeywordXmlResponse {
    #[serde(default)]
    available: String,
    #[serde(default)]
    recycle: String,
}

pub fn keyword_resource(keyword: &Keyword) -> String {
    resource("keywords", [keyword.as_str()])
}

pub fn decode_keyword_xml_response(xml: &str) -> Result<KeywordAvailability, TransportError> {
    let parsed: KeywordXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(KeywordAvailability {
        available: decode_flag(&parsed.available),
        recycle: decode_flag(&parsed.recycle),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_resource_is_escaped() {
        let keyword = Keyword::new("two words").unwrap();
        assert_eq!(keyword_resource(&keyword), "keywords/two+words");
    }

    #[test]
    fn decode_keyword_flags() {
        let xml = r#"<response>
          <available>true</available>
          <recycle>false</recycle>
        </response>"#;

        let parsed = decode_keyword_xml_response(xml).unwrap();
        assert_eq!(
            parsed,
            KeywordAvailability {
                available: true,
                recycle: false,
            }
        );
    }

    #[test]
    fn decode_keyword_treats_unknown_values_as_false() {
        let xml = "<response><available>yes</available></response>";
        let parsed = decode_keyword_xml_response(xml).unwrap();
        assert!(!parsed.available);
        assert!(!parsed.recycle);
    }
}
