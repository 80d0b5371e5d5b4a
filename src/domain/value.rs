use crate::domain::validation::ValidationError;

/// Environment variable consulted when no username is passed explicitly.
pub const USERNAME_ENV: &str = "TEXTMARKETER_USERNAME";
/// Environment variable consulted when no password is passed explicitly.
pub const PASSWORD_ENV: &str = "TEXTMARKETER_PASSWORD";

#[derive(Clone, PartialEq, Eq, Hash)]
/// Gateway API username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Parameter name used by the gateway (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Username(..)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Gateway API password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Parameter name used by the gateway (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Username/password pair sent with every gateway request.
///
/// `Debug` output redacts both parts.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate both parts; neither may be empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Like [`Credentials::new`], but an empty argument falls back to the
    /// `TEXTMARKETER_USERNAME` / `TEXTMARKETER_PASSWORD` environment variables.
    pub fn resolve(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::resolve_with(username, password, |key| std::env::var(key).ok())
    }

    pub(crate) fn resolve_with(
        username: impl Into<String>,
        password: impl Into<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ValidationError> {
        let mut username = username.into();
        if username.trim().is_empty() {
            username = lookup(USERNAME_ENV).unwrap_or_default();
        }
        let mut password = password.into();
        if password.is_empty() {
            password = lookup(PASSWORD_ENV).unwrap_or_default();
        }
        Self::new(username, password)
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Which gateway deployment requests are sent to.
pub enum Environment {
    /// Test deployment; messages are never delivered.
    Sandbox,
    #[default]
    Production,
}

impl Environment {
    /// Fixed REST base URL for this environment (always ends with `/`).
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://sandbox.textmarketer.biz/services/rest/",
            Self::Production => "https://api.textmarketer.co.uk/services/rest/",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Point in time accepted by the gateway (`schedule`, report ranges).
///
/// Unix timestamps are rendered as ISO-8601 in Europe/London civil time before
/// they go on the wire; text is sent verbatim.
pub enum GatewayTime {
    /// Seconds since the Unix epoch.
    Unix(i64),
    /// Caller-formatted value, passed through unchanged.
    Text(String),
}

impl From<i64> for GatewayTime {
    fn from(value: i64) -> Self {
        Self::Unix(value)
    }
}

impl From<&str> for GatewayTime {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for GatewayTime {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Name of a send group or stop group.
///
/// Invariant: non-empty after trimming.
pub struct GroupName(String);

impl GroupName {
    pub const FIELD: &'static str = "group";

    /// Create a validated [`GroupName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery report (campaign) name.
///
/// Invariant: non-empty after trimming. [`ReportName::all`] aggregates every campaign.
pub struct ReportName(String);

impl ReportName {
    pub const FIELD: &'static str = "name";

    /// Create a validated [`ReportName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The `all` token, matching reports across every campaign.
    pub fn all() -> Self {
        Self("all".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Reply keyword on a shared short code.
///
/// Invariant: non-empty after trimming.
pub struct Keyword(String);

impl Keyword {
    pub const FIELD: &'static str = "keyword";

    /// Create a validated [`Keyword`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Identifier of a scheduled (not yet sent) message, as returned by `send_sms`.
///
/// Invariant: non-empty after trimming.
pub struct ScheduledId(String);

impl ScheduledId {
    pub const FIELD: &'static str = "scheduled_id";

    /// Create a validated [`ScheduledId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ScheduledId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Company name of a sub-account.
///
/// Invariant: non-empty after trimming.
pub struct CompanyName(String);

impl CompanyName {
    pub const FIELD: &'static str = "company_name";

    /// Create a validated [`CompanyName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = Username::new(" user ").unwrap();
        assert_eq!(username.as_str(), "user");
        assert!(Username::new("  ").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        assert_eq!(GroupName::new(" Sales ").unwrap().as_str(), "Sales");
        assert!(GroupName::new("").is_err());

        assert_eq!(ReportName::new("mycampaign").unwrap().as_str(), "mycampaign");
        assert_eq!(ReportName::all().as_str(), "all");

        assert_eq!(Keyword::new(" pizza ").unwrap().as_str(), "pizza");
        assert_eq!(ScheduledId::from(42).as_str(), "42");
        assert!(CompanyName::new(" ").is_err());
    }

    #[test]
    fn credentials_debug_is_redacted() {
        let credentials = Credentials::new("user", "hunter2").unwrap();
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("user\""));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn credentials_fall_back_to_configured_defaults() {
        let defaults = HashMap::from([
            (USERNAME_ENV, "env_user".to_owned()),
            (PASSWORD_ENV, "env_pass".to_owned()),
        ]);
        let lookup = |key: &str| defaults.get(key).cloned();

        let credentials = Credentials::resolve_with("", "", lookup).unwrap();
        assert_eq!(credentials.username().as_str(), "env_user");
        assert_eq!(credentials.password().as_str(), "env_pass");

        let credentials = Credentials::resolve_with("explicit", "", lookup).unwrap();
        assert_eq!(credentials.username().as_str(), "explicit");
        assert_eq!(credentials.password().as_str(), "env_pass");
    }

    #[test]
    fn credentials_without_defaults_are_rejected() {
        let err = Credentials::resolve_with("user", "", |_| None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: Password::FIELD
            }
        );
    }

    #[test]
    fn environments_have_fixed_base_urls() {
        assert_eq!(
            Environment::Sandbox.base_url(),
            "https://sandbox.textmarketer.biz/services/rest/"
        );
        assert_eq!(
            Environment::Production.base_url(),
            "https://api.textmarketer.co.uk/services/rest/"
        );
        assert_eq!(Environment::default(), Environment::Production);
    }

    #[test]
    fn gateway_time_conversions() {
        assert_eq!(GatewayTime::from(1_700_000_000), GatewayTime::Unix(1_700_000_000));
        assert_eq!(
            GatewayTime::from("2024-01-01T00:00:00+00:00"),
            GatewayTime::Text("2024-01-01T00:00:00+00:00".to_owned())
        );
    }
}
