#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub message_id: u64,
    /// Non-zero only for scheduled sends.
    pub scheduled_id: u64,
    pub credits_used: u64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    pub scheduled_id: u64,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditTransferResult {
    pub source_credits_before: i64,
    pub source_credits_after: i64,
    pub target_credits_before: i64,
    pub target_credits_after: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordAvailability {
    pub available: bool,
    /// The keyword was used before and is being recycled.
    pub recycle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: u64,
    /// Number of members, as counted by the gateway.
    pub numbers: u64,
    pub name: String,
    pub is_stop: bool,
    /// Populated only by single-group lookups; empty in group listings.
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMembershipResult {
    pub added: Vec<String>,
    /// Numbers refused because they are on a stop group.
    pub stopped: Vec<String>,
    pub duplicates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReportSummary {
    pub name: String,
    pub last_updated: String,
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReports {
    pub userdirectory: String,
    pub reports: Vec<DeliveryReportSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReportRow {
    pub message_id: String,
    pub mobile_number: String,
    pub status: String,
    pub last_updated: String,
    pub custom: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReportDetail {
    pub name: String,
    pub last_updated: String,
    pub extension: String,
    pub rows: Vec<DeliveryReportRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAccount {
    pub account_id: String,
    pub api_username: String,
    pub api_password: String,
    pub username: String,
    pub password: String,
    pub company_name: String,
    pub create_date: String,
    pub credits: i64,
    pub notification_email: String,
    pub notification_mobile: String,
}
