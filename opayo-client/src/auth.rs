//! Authentication context: credentials plus URL resolution.

use crate::error::ClientError;

/// The capability every request message consumes.
///
/// Messages never build URLs themselves; host and API-version concerns
/// live behind this trait so they have a single source of truth.
pub trait AuthContext {
    /// The full URL for a resource, given its path segments.
    fn url(&self, resource_path: &[&str]) -> String;

    /// The integration key half of the credential pair.
    fn integration_key(&self) -> &str;

    /// The integration password half of the credential pair.
    fn integration_password(&self) -> &str;
}

/// Which gateway environment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Live,
    Test,
}

impl Endpoint {
    /// Base URL of this environment, including the API version.
    pub fn base_url(&self) -> &'static str {
        match self {
            Endpoint::Live => "https://pi-live.sagepay.com/api/v1",
            Endpoint::Test => "https://pi-test.sagepay.com/api/v1",
        }
    }
}

/// Credentials for one gateway environment.
pub struct Auth {
    endpoint: Endpoint,
    integration_key: String,
    integration_password: String,
}

impl Auth {
    /// Creates an auth context.
    ///
    /// Empty credentials are a configuration mistake and fail here, before
    /// any message is built against them.
    pub fn new(
        endpoint: Endpoint,
        integration_key: impl Into<String>,
        integration_password: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let integration_key = integration_key.into();
        let integration_password = integration_password.into();

        if integration_key.is_empty() || integration_password.is_empty() {
            return Err(ClientError::MissingCredentials);
        }

        Ok(Self {
            endpoint,
            integration_key,
            integration_password,
        })
    }

    /// The environment this context points at.
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }
}

impl AuthContext for Auth {
    fn url(&self, resource_path: &[&str]) -> String {
        format!("{}/{}", self.endpoint.base_url(), resource_path.join("/"))
    }

    fn integration_key(&self) -> &str {
        &self.integration_key
    }

    fn integration_password(&self) -> &str {
        &self.integration_password
    }
}
