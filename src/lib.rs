//! Typed, blocking Rust client for the Textmarketer XML-over-HTTP SMS gateway.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks (parameter encoding, XML decoding, path escaping,
//! Europe/London timestamps), and a small client layer issuing one HTTP call
//! per operation.
//!
//! ```rust,no_run
//! use textmarketer::{Environment, SendOptions, SendSms, TextMarketerClient};
//!
//! fn main() -> Result<(), textmarketer::TextMarketerError> {
//!     let client = TextMarketerClient::new("user", "pass", Environment::Sandbox)?;
//!     let request = SendSms::new("hello", "447000000001", "Acme", SendOptions::default());
//!     let result = client.send_sms(&request)?;
//!     println!("sent {} using {} credits", result.message_id, result.credits_used);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{TextMarketerClient, TextMarketerClientBuilder, TextMarketerError};
pub use domain::{
    CompanyName, CreateSubAccount, CreditTransfer, CreditTransferResult, CreditTransferTarget,
    Credentials, DeleteResult, DeliveryReportDetail, DeliveryReportQuery, DeliveryReportRow,
    DeliveryReportSummary, DeliveryReports, Environment, GatewayTime, Group,
    GroupMembershipResult, GroupName, Keyword, KeywordAvailability, ReportName, ScheduledId,
    SendOptions, SendResult, SendSms, SubAccount, SubAccountOptions, ValidationError,
};
