use serde::Deserialize;

use super::flag::decode_flag;
use super::path::resource;
use crate::domain::{Group, GroupMembershipResult, GroupName};

pub const GROUPS_RESOURCE: &str = "groups";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[derive(Debug, Clone, Deserialize)]
struct GroupsXmlResponse {
    #[serde(default)]
    groups: Option<GroupsXml>,
}

#[derive(Debug, Clone, Deserialize)]
struct GroupsXml {
    #[serde(default)]
    group: Vec<GroupXml>,
}

#[derive(Debug, Clone, Deserialize)]
struct GroupXmlResponse {
    group: GroupXml,
}

#[derive(Debug, Clone, Deserialize)]
struct GroupXml {
    #[serde(rename = "@id")]
    id: u64,
    #[serde(rename = "@numbers", default)]
    numbers: u64,
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@is_stop", default)]
    is_stop: String,
    #[serde(default)]
    number: Vec<String>,
}

impl GroupXml {
    fn into_group(self, with_members: bool) -> Group {
        Group {
            id: self.id,
            numbers: self.numbers,
            name: self.name,
            is_stop: decode_flag(&self.is_stop),
            members: if with_members { self.number } else { Vec::new() },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MembershipXmlResponse {
    #[serde(default)]
    added: NumbersXml,
    #[serde(default)]
    stopped: NumbersXml,
    #[serde(default)]
    duplicates: NumbersXml,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct NumbersXml {
    #[serde(default)]
    number: Vec<String>,
}

pub fn group_resource(group: &GroupName) -> String {
    resource("group", [group.as_str()])
}

pub fn encode_add_numbers_form<S: AsRef<str>>(numbers: &[S]) -> Vec<(String, String)> {
    let joined = numbers
        .iter()
        .map(|number| number.as_ref())
        .collect::<Vec<&str>>()
        .join(",");
    vec![("numbers".to_owned(), joined)]
}

/// Group summaries in document order; members are never populated here.
pub fn decode_groups_xml_response(xml: &str) -> Result<Vec<Group>, TransportError> {
    let parsed: GroupsXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(parsed
        .groups
        .map(|groups| groups.group)
        .unwrap_or_default()
        .into_iter()
        .map(|group| group.into_group(false))
        .collect())
}

pub fn decode_group_xml_response(xml: &str) -> Result<Group, TransportError> {
    let parsed: GroupXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(parsed.group.into_group(true))
}

pub fn decode_group_membership_xml_response(
    xml: &str,
) -> Result<GroupMembershipResult, TransportError> {
    let parsed: MembershipXmlResponse = quick_xml::de::from_str(xml)?;
    Ok(GroupMembershipResult {
        added: parsed.added.number,
        stopped: parsed.stopped.number,
        duplicates: parsed.duplicates.number,
    })
}
