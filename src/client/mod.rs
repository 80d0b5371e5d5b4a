//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::{
    CreateSubAccount, CreditTransfer, CreditTransferResult, CreditTransferTarget, Credentials,
    DeleteResult, DeliveryReportDetail, DeliveryReportQuery, DeliveryReports, Environment, Group,
    GroupMembershipResult, GroupName, Keyword, KeywordAvailability, Password, ScheduledId,
    SendResult, SendSms, SubAccount, Username, ValidationError,
};
use crate::transport::{self, GatewayErrorEntry};

const CLIENT_TAG_FIELD: &str = "apiClient";
const CLIENT_TAG: &str = concat!("textmarketer-rust-", env!("CARGO_PKG_VERSION"));
const SANDBOX_FIELD: &str = "sandbox";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: String,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }
        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TextMarketerClient`].
///
/// Match on the variant to tell configuration mistakes, local validation,
/// transport failures, gateway rejections and undecodable responses apart.
pub enum TextMarketerError {
    /// Credentials were missing when the client was constructed.
    #[error("configuration error: {0}")]
    Configuration(#[source] ValidationError),

    /// A request value was rejected before anything was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered with a non-200 status.
    ///
    /// For HTTP 400 `code`/`message` come from the first `<error>` of the body;
    /// otherwise `code` is the HTTP status and `message` the raw body.
    #[error("gateway error {code} (HTTP {status}): {message}")]
    Gateway {
        status: u16,
        code: i32,
        message: String,
    },

    /// A 200 response body could not be decoded.
    #[error("protocol error: {0}")]
    Protocol(#[source] Box<dyn StdError + Send + Sync>),
}

impl TextMarketerError {
    /// `true` for HTTP 403, the gateway's answer to bad credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Gateway { status: 403, .. })
    }

    /// Gateway error code, if this is a [`TextMarketerError::Gateway`].
    pub fn gateway_code(&self) -> Option<i32> {
        match self {
            Self::Gateway { code, .. } => Some(*code),
            _ => None,
        }
    }
}

fn protocol<E>(err: E) -> TextMarketerError
where
    E: StdError + Send + Sync + 'static,
{
    TextMarketerError::Protocol(Box::new(err))
}

#[derive(Debug, Clone)]
/// Builder for [`TextMarketerClient`].
///
/// Use this when you need to pick the environment, force sandbox mode, or
/// customize the endpoint, timeout, or user-agent.
pub struct TextMarketerClientBuilder {
    credentials: Credentials,
    environment: Environment,
    base_url: Option<String>,
    force_sandbox: bool,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl TextMarketerClientBuilder {
    /// Create a builder targeting production with no overrides.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::default(),
            base_url: None,
            force_sandbox: false,
            timeout: None,
            user_agent: None,
        }
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Send `sandbox=true` with every request, whatever the environment.
    pub fn force_sandbox(mut self, force_sandbox: bool) -> Self {
        self.force_sandbox = force_sandbox;
        self
    }

    /// Override the REST base URL chosen by the environment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = Some(base_url);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TextMarketerClient`].
    pub fn build(self) -> Result<TextMarketerClient, TextMarketerError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent.as_deref() {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TextMarketerError::Transport(Box::new(err)))?;

        Ok(self.finish(Arc::new(ReqwestTransport { client })))
    }

    fn finish(self, http: Arc<dyn HttpTransport>) -> TextMarketerClient {
        let base_url = self
            .base_url
            .unwrap_or_else(|| self.environment.base_url().to_owned());
        TextMarketerClient {
            credentials: self.credentials,
            base_url,
            force_sandbox: self.force_sandbox,
            http,
            last_errors: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

/// Blocking client for the Textmarketer REST gateway.
///
/// Every method performs exactly one HTTP round trip. Credentials and the
/// `apiClient` tag are attached to each request; responses are XML.
///
/// Cloning is cheap: clones share the HTTP transport and the error map behind
/// [`TextMarketerClient::last_errors`], so a failure seen through one clone is
/// visible through all of them. The map is guarded by a mutex; with concurrent
/// failures it reflects whichever call finished last.
#[derive(Clone)]
pub struct TextMarketerClient {
    credentials: Credentials,
    base_url: String,
    force_sandbox: bool,
    http: Arc<dyn HttpTransport>,
    last_errors: Arc<Mutex<BTreeMap<i32, String>>>,
}

impl TextMarketerClient {
    /// Create a client for `environment`.
    ///
    /// An empty `username` or `password` falls back to the
    /// `TEXTMARKETER_USERNAME` / `TEXTMARKETER_PASSWORD` environment variables;
    /// if a credential is still empty this fails with
    /// [`TextMarketerError::Configuration`].
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        environment: Environment,
    ) -> Result<Self, TextMarketerError> {
        Self::new_with_lookup(username, password, environment, |name| {
            std::env::var(name).ok()
        })
    }

    fn new_with_lookup(
        username: impl Into<String>,
        password: impl Into<String>,
        environment: Environment,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, TextMarketerError> {
        let credentials = Credentials::resolve_with(username, password, lookup)
            .map_err(TextMarketerError::Configuration)?;
        Self::builder(credentials).environment(environment).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> TextMarketerClientBuilder {
        TextMarketerClientBuilder::new(credentials)
    }

    /// Base URL every resource path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Errors recorded by the most recent failing call, keyed by gateway code.
    ///
    /// Each failing call replaces the whole map; successful calls leave it alone.
    pub fn last_errors(&self) -> BTreeMap<i32, String> {
        self.last_errors.lock().clone()
    }

    /// Check the credentials with a credits lookup.
    ///
    /// Returns `Ok(false)` on HTTP 403; every other failure is returned as is.
    pub fn is_login_valid(&self) -> Result<bool, TextMarketerError> {
        match self.get_credits() {
            Ok(_) => Ok(true),
            Err(err) if err.is_auth_failure() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Send (or schedule) one SMS.
    ///
    /// Errors:
    /// - [`TextMarketerError::Validation`] if a numeric schedule cannot be rendered,
    /// - [`TextMarketerError::Gateway`] when the gateway rejects a parameter
    ///   (bad number, message too long, validity out of range).
    pub fn send_sms(&self, request: &SendSms) -> Result<SendResult, TextMarketerError> {
        let params = transport::encode_send_sms_form(request)?;
        let body = self.execute(HttpMethod::Post, transport::SMS_RESOURCE, params)?;
        transport::decode_send_sms_xml_response(&body).map_err(protocol)
    }

    /// Cancel a scheduled message.
    pub fn delete_sms(&self, scheduled_id: &ScheduledId) -> Result<DeleteResult, TextMarketerError> {
        let resource = transport::delete_sms_resource(scheduled_id);
        let body = self.execute(HttpMethod::Delete, &resource, Vec::new())?;
        transport::decode_delete_sms_xml_response(&body).map_err(protocol)
    }

    /// Credits left on the account (`0` when the gateway omits the figure).
    pub fn get_credits(&self) -> Result<i64, TextMarketerError> {
        let body = self.execute(HttpMethod::Get, transport::CREDITS_RESOURCE, Vec::new())?;
        transport::decode_credits_xml_response(&body).map_err(protocol)
    }

    pub fn transfer_credits(
        &self,
        request: &CreditTransfer,
    ) -> Result<CreditTransferResult, TextMarketerError> {
        let params = transport::encode_transfer_credits_form(request);
        let body = self.execute(HttpMethod::Post, transport::CREDITS_RESOURCE, params)?;
        transport::decode_credit_transfer_xml_response(&body).map_err(protocol)
    }

    /// Move credits to another account identified by its account number.
    pub fn transfer_credits_to_account(
        &self,
        quantity: u64,
        account_number: impl Into<String>,
    ) -> Result<CreditTransferResult, TextMarketerError> {
        self.transfer_credits(&CreditTransfer {
            quantity,
            target: CreditTransferTarget::Account(account_number.into()),
        })
    }

    /// Move credits to another account identified by its login.
    pub fn transfer_credits_to_user(
        &self,
        quantity: u64,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<CreditTransferResult, TextMarketerError> {
        self.transfer_credits(&CreditTransfer {
            quantity,
            target: CreditTransferTarget::User {
                username: username.into(),
                password: password.into(),
            },
        })
    }

    pub fn get_keyword_availability(
        &self,
        keyword: &Keyword,
    ) -> Result<KeywordAvailability, TextMarketerError> {
        let resource = transport::keyword_resource(keyword);
        let body = self.execute(HttpMethod::Get, &resource, Vec::new())?;
        transport::decode_keyword_xml_response(&body).map_err(protocol)
    }

    /// All send and stop groups, without members.
    pub fn get_groups(&self) -> Result<Vec<Group>, TextMarketerError> {
        let body = self.execute(HttpMethod::Get, transport::GROUPS_RESOURCE, Vec::new())?;
        transport::decode_groups_xml_response(&body).map_err(protocol)
    }

    pub fn add_numbers_to_group_with_name<S: AsRef<str>>(
        &self,
        numbers: &[S],
        group: &GroupName,
    ) -> Result<GroupMembershipResult, TextMarketerError> {
        let resource = transport::group_resource(group);
        let params = transport::encode_add_numbers_form(numbers);
        let body = self.execute(HttpMethod::Post, &resource, params)?;
        transport::decode_group_membership_xml_response(&body).map_err(protocol)
    }

    /// Old argument order with a comma-separated number list.
    #[deprecated(note = "use `add_numbers_to_group_with_name`")]
    pub fn add_numbers_to_group(
        &self,
        group: &GroupName,
        numbers: &str,
    ) -> Result<GroupMembershipResult, TextMarketerError> {
        let numbers = numbers.split(',').collect::<Vec<_>>();
        self.add_numbers_to_group_with_name(numbers.as_slice(), group)
    }

    /// One group including its members.
    pub fn get_group(&self, group: &GroupName) -> Result<Group, TextMarketerError> {
        let resource = transport::group_resource(group);
        let body = self.execute(HttpMethod::Get, &resource, Vec::new())?;
        transport::decode_group_xml_response(&body).map_err(protocol)
    }

    /// Create the group if it does not exist yet and return it.
    pub fn add_group(&self, group: &GroupName) -> Result<Group, TextMarketerError> {
        let resource = transport::group_resource(group);
        let body = self.execute(HttpMethod::Put, &resource, Vec::new())?;
        transport::decode_group_xml_response(&body).map_err(protocol)
    }

    pub fn get_delivery_reports(&self) -> Result<DeliveryReports, TextMarketerError> {
        let body = self.execute(
            HttpMethod::Get,
            transport::DELIVERY_REPORTS_RESOURCE,
            Vec::new(),
        )?;
        transport::decode_delivery_reports_xml_response(&body).map_err(protocol)
    }

    /// Fetch delivery report rows, optionally filtered by custom tag and time range.
    ///
    /// The gateway answers HTTP 404 (surfaced as [`TextMarketerError::Gateway`])
    /// when nothing matches.
    pub fn get_delivery_report(
        &self,
        query: &DeliveryReportQuery,
    ) -> Result<Vec<DeliveryReportDetail>, TextMarketerError> {
        let resource = transport::delivery_report_resource(query)?;
        let body = self.execute(HttpMethod::Get, &resource, Vec::new())?;
        transport::decode_delivery_report_xml_response(&body).map_err(protocol)
    }

    pub fn create_sub_account(
        &self,
        request: &CreateSubAccount,
    ) -> Result<SubAccount, TextMarketerError> {
        let params = transport::encode_create_sub_account_form(request);
        let body = self.execute(HttpMethod::Put, transport::SUB_ACCOUNT_RESOURCE, params)?;
        transport::decode_sub_account_xml_response(&body).map_err(protocol)
    }

    fn push_auth_params(&self, params: &mut Vec<(String, String)>) {
        params.push((
            Username::FIELD.to_owned(),
            self.credentials.username().as_str().to_owned(),
        ));
        params.push((
            Password::FIELD.to_owned(),
            self.credentials.password().as_str().to_owned(),
        ));
        params.push((CLIENT_TAG_FIELD.to_owned(), CLIENT_TAG.to_owned()));
        if self.force_sandbox {
            params.push((SANDBOX_FIELD.to_owned(), "true".to_owned()));
        }
    }

    /// Perform one request and return the body of a 200 response.
    ///
    /// GET/DELETE carry everything in the query string, POST everything in the
    /// form body; PUT keeps credentials in the query string and sends
    /// `params` as the form body.
    fn execute(
        &self,
        method: HttpMethod,
        resource: &str,
        params: Vec<(String, String)>,
    ) -> Result<String, TextMarketerError> {
        let mut common = Vec::<(String, String)>::new();
        self.push_auth_params(&mut common);

        let (query, form) = match method {
            HttpMethod::Get | HttpMethod::Delete => {
                common.extend(params);
                (common, Vec::new())
            }
            HttpMethod::Post => {
                common.extend(params);
                (Vec::new(), common)
            }
            HttpMethod::Put => (common, params),
        };

        debug!(method = method.as_str(), resource, "sending gateway request");
        let response = self
            .http
            .send(HttpRequest {
                method,
                url: format!("{}{}", self.base_url, resource),
                query,
                form,
            })
            .map_err(TextMarketerError::Transport)?;
        debug!(status = response.status, resource, "gateway responded");

        if response.status == 200 {
            return Ok(response.body);
        }

        Err(self.record_failure(response))
    }

    fn record_failure(&self, response: HttpResponse) -> TextMarketerError {
        let status = response.status;
        let structured = if status == 400 {
            transport::decode_errors_xml_response(&response.body)
                .ok()
                .filter(|entries| !entries.is_empty())
        } else {
            None
        };
        let entries = structured.unwrap_or_else(|| {
            vec![GatewayErrorEntry {
                code: i32::from(status),
                message: response.body,
            }]
        });

        let (code, message) = entries
            .first()
            .map(|entry| (entry.code, entry.message.clone()))
            .unwrap_or_default();
        *self.last_errors.lock() = entries
            .into_iter()
            .map(|entry| (entry.code, entry.message))
            .collect();

        warn!(status, code, "gateway rejected request");
        TextMarketerError::Gateway {
            status,
            code,
            message,
        }
    }
}
