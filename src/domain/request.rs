use crate::domain::validation::ValidationError;
use crate::domain::value::{CompanyName, GatewayTime, ReportName};

/// Validity period (hours) used when the caller does not pick one.
pub const DEFAULT_VALIDITY_HOURS: u16 = 72;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOptions {
    /// Hours the gateway keeps retrying delivery.
    pub validity: u16,
    /// Address notified by the gateway about the send.
    pub email: Option<String>,
    /// Free-form tag echoed back in delivery reports.
    pub custom: Option<String>,
    /// Deliver later instead of immediately.
    pub schedule: Option<GatewayTime>,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            validity: DEFAULT_VALIDITY_HOURS,
            email: None,
            custom: None,
            schedule: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One outbound message.
///
/// Content rules (length, number format, validity range) are enforced by the
/// gateway and reported back as a [`crate::TextMarketerError::Gateway`].
pub struct SendSms {
    message: String,
    mobile_number: String,
    originator: String,
    options: SendOptions,
}

impl SendSms {
    pub fn new(
        message: impl Into<String>,
        mobile_number: impl Into<String>,
        originator: impl Into<String>,
        options: SendOptions,
    ) -> Self {
        Self {
            message: message.into(),
            mobile_number: mobile_number.into(),
            originator: originator.into(),
            options,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn originator(&self) -> &str {
        &self.originator
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreditTransferTarget {
    /// Account number of the receiving account.
    Account(String),
    /// Login of the receiving account.
    User { username: String, password: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditTransfer {
    pub quantity: u64,
    pub target: CreditTransferTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Filter for a single delivery report lookup.
///
/// The filter selects one of four resource shapes: plain, custom tag only,
/// date range only, or custom tag plus date range.
pub struct DeliveryReportQuery {
    name: ReportName,
    range: Option<(GatewayTime, GatewayTime)>,
    custom: Option<String>,
}

impl DeliveryReportQuery {
    pub fn new(name: ReportName) -> Self {
        Self {
            name,
            range: None,
            custom: None,
        }
    }

    /// Restrict to reports updated between `start` and `end`.
    pub fn between(mut self, start: impl Into<GatewayTime>, end: impl Into<GatewayTime>) -> Self {
        self.range = Some((start.into(), end.into()));
        self
    }

    /// Restrict to messages sent with this custom tag. An empty tag means no filter.
    pub fn custom(mut self, custom: impl Into<String>) -> Self {
        let custom = custom.into();
        self.custom = if custom.is_empty() { None } else { Some(custom) };
        self
    }

    pub fn name(&self) -> &ReportName {
        &self.name
    }

    pub fn range(&self) -> Option<&(GatewayTime, GatewayTime)> {
        self.range.as_ref()
    }

    pub fn custom_tag(&self) -> Option<&str> {
        self.custom.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubAccountOptions {
    pub notification_mobile: Option<String>,
    pub notification_email: Option<String>,
    /// Login for the new account; generated by the gateway when absent.
    pub username: Option<String>,
    /// Password for the new account; generated by the gateway when absent.
    pub password: Option<String>,
    pub promo_code: Option<String>,
    /// Charge the sub-account at the parent account's rates.
    pub override_rates: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSubAccount {
    company_name: CompanyName,
    options: SubAccountOptions,
}

impl CreateSubAccount {
    /// Invariant: at least one of `notification_mobile` / `notification_email`
    /// is non-empty.
    pub fn new(
        company_name: CompanyName,
        options: SubAccountOptions,
    ) -> Result<Self, ValidationError> {
        let has_contact = [&options.notification_mobile, &options.notification_email]
            .into_iter()
            .any(|value| value.as_deref().is_some_and(|it| !it.trim().is_empty()));
        if !has_contact {
            return Err(ValidationError::MissingNotificationContact);
        }
        Ok(Self {
            company_name,
            options,
        })
    }

    pub fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    pub fn options(&self) -> &SubAccountOptions {
        &self.options
    }
}
