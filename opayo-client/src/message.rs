//! Shared request message contract.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::Method;

use crate::auth::AuthContext;

/// Base contract for all request messages.
///
/// Resource path and method are fixed per message kind, not per instance;
/// everything environment-specific comes from the [`AuthContext`].
pub trait Request {
    /// The auth context this message is addressed through.
    fn auth(&self) -> &dyn AuthContext;

    /// The path of this resource, as ordered path segments.
    fn resource_path(&self) -> &'static [&'static str];

    /// The HTTP method this message is sent with. Most messages are
    /// POSTed, so that is the default.
    fn method(&self) -> Method {
        Method::POST
    }

    /// The full URL of this resource.
    fn url(&self) -> String {
        self.auth().url(self.resource_path())
    }

    /// The HTTP Basic Auth header, as a single name/value pair.
    ///
    /// The gateway validates the header literally, so this is exactly
    /// `Basic` followed by base64 of `key:password`. Use it when the
    /// transport does not do Basic Auth itself.
    fn basic_auth_headers(&self) -> Vec<(String, String)> {
        let credentials = format!(
            "{}:{}",
            self.auth().integration_key(),
            self.auth().integration_password()
        );

        vec![(
            "Authorization".to_string(),
            format!("Basic {}", STANDARD.encode(credentials)),
        )]
    }
}
