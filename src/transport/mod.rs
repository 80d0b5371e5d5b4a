//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod account;
mod credits;
mod errors;
mod flag;
mod groups;
mod keywords;
mod number;
mod path;
mod reports;
mod sms;
mod time;

pub use account::{
    SUB_ACCOUNT_RESOURCE, decode_sub_account_xml_response, encode_create_sub_account_form,
};
pub use credits::{
    CREDITS_RESOURCE, decode_credit_transfer_xml_response, decode_credits_xml_response,
    encode_transfer_credits_form,
};
pub use errors::{GatewayErrorEntry, decode_errors_xml_response};
pub use groups::{
    GROUPS_RESOURCE, decode_group_membership_xml_response, decode_group_xml_response,
    decode_groups_xml_response, encode_add_numbers_form, group_resource,
};
pub use keywords::{decode_keyword_xml_response, keyword_resource};
pub use reports::{
    DELIVERY_REPORTS_RESOURCE, decode_delivery_report_xml_response,
    decode_delivery_reports_xml_response, delivery_report_resource,
};
pub use sms::{
    SMS_RESOURCE, decode_delete_sms_xml_response, decode_send_sms_xml_response,
    delete_sms_resource, encode_send_sms_form,
};
