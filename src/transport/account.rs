use serde::Deserialize;

use super::number::deserialize_count;
use crate::domain::{CompanyName, CreateSubAccount, SubAccount};

pub const SUB_ACCOUNT_RESOURCE: &str = "account/sub";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[derive(Debug, Clone, Deserialize)]
struct SubAccountXmlResponse {
    account_id: String,
    #[serde(default)]
    api_username: String,
    #[serde(default)]
    api_password: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    create_date: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    credits: i64,
    #[serde(default)]
    notification_email: String,
    #[serde(default)]
    notification_mobile: String,
}

/// `company_name` is always sent; optional fields only when non-empty.
pub fn encode_create_sub_account_form(request: &CreateSubAccount) -> Vec<(String, String)> {
    let options = request.options();
    let mut params = vec![(
        CompanyName::FIELD.to_owned(),
        request.company_name().as_str().to_owned(),
    )];

    let optional = [
        ("notification_mobile", &options.notification_mobile),
        ("notification_email", &options.notification_email),
        ("username", &options.username),
        ("password", &options.password),
        ("promo_code", &options.promo_code),
    ];
    for (key, value) in optional {
        if let Some(value) = value.as_deref().filter(|it| !it.is_empty()) {
            params.push((key.to_owned(), value.to_owned()));
        }
    }
    if options.override_rates {
        params.push(("override_pricing".to_owned(), "true".to_owned()));
    }
    params
}

pub fn decode_sub_account_xml_response(xml: &str) -> Result<SubAccount, TransportError> {
    let parsed: SubAccountXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(SubAccount {
        account_id: parsed.account_id,
        api_username: parsed.api_username,
        api_password: parsed.api_password,
        username: parsed.username,
        password: parsed.password,
        company_name: parsed.company_name,
        create_date: parsed.create_date,
        credits: parsed.credits,
        notification_email: parsed.notification_email,
        notification_mobile: parsed.notification_mobile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SubAccountOptions;

    #[test]
    fn encode_includes_only_non_empty_optional_fields() {
        let request = CreateSubAccount::new(
            CompanyName::new("Acme Ltd").unwrap(),
            SubAccountOptions {
                notification_email: Some("ops@acme.test".to_owned()),
                username: Some(String::new()),
                promo_code: Some("SPRING".to_owned()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(
            encode_create_sub_account_form(&request),
            vec![
                ("company_name".to_owned(), "Acme Ltd".to_owned()),
                ("notification_email".to_owned(), "ops@acme.test".to_owned()),
                ("promo_code".to_owned(), "SPRING".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_override_rates_flag() {
        let request = CreateSubAccount::new(
            CompanyName::new("Acme Ltd").unwrap(),
            SubAccountOptions {
                notification_mobile: Some("447000000001".to_owned()),
                override_rates: true,
                ..Default::default()
            },
        )
        .unwrap();

        let params = encode_create_sub_account_form(&request);
        assert!(
            params
                .iter()
                .any(|(k, v)| k == "override_pricing" && v == "true")
        );
    }

    #[test]
    fn decode_sub_account_response() {
        let xml = r#"<response processed_date="2023-11-14T22:13:20+00:00">
          <account_id>24398</account_id>
          <api_username>apiuser</api_username>
          <api_password>apipass</api_password>
          <company_name>Acme Ltd</company_name>
          <create_date>2023-11-14T22:13:20+00:00</create_date>
          <credits>0</credits>
          <notification_email>ops@acme.test</notification_email>
          <notification_mobile>447000000001</notification_mobile>
          <username>acmeuser</username>
          <password>acmepass</password>
        </response>"#;

        let parsed = decode_sub_account_xml_response(xml).unwrap();
        assert_eq!(
            parsed,
            SubAccount {
                account_id: "24398".to_owned(),
                api_username: "apiuser".to_owned(),
                api_password: "apipass".to_owned(),
                username: "acmeuser".to_owned(),
                password: "acmepass".to_owned(),
                company_name: "Acme Ltd".to_owned(),
                create_date: "2023-11-14T22:13:20+00:00".to_owned(),
                credits: 0,
                notification_email: "ops@acme.test".to_owned(),
                notification_mobile: "447000000001".to_owned(),
            }
        );
    }
}
