//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CreateSubAccount, CreditTransfer, CreditTransferTarget, DEFAULT_VALIDITY_HOURS,
    DeliveryReportQuery, SendOptions, SendSms, SubAccountOptions,
};
pub use response::{
    CreditTransferResult, DeleteResult, DeliveryReportDetail, DeliveryReportRow,
    DeliveryReportSummary, DeliveryReports, Group, GroupMembershipResult, KeywordAvailability,
    SendResult, SubAccount,
};
pub use validation::ValidationError;
pub use value::{
    CompanyName, Credentials, Environment, GatewayTime, GroupName, Keyword, PASSWORD_ENV,
    Password, ReportName, ScheduledId, USERNAME_ENV, Username,
};
