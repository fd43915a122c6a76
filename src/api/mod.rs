// API layer - HTTP endpoints

pub mod auth;
pub mod metrics;
pub mod patients;

pub use auth::AuthApi;
pub use metrics::MetricsApi;
pub use patients::PatientsApi;

use poem::{FromRequest, Request, RequestBody};
use poem_openapi::auth::{Bearer, BearerAuthorization};

/// JWT Bearer token authentication
///
/// Handlers take this as `Option<BearerAuth>` so that requests with a
/// missing or malformed Authorization header still reach the access
/// guard. A derived `SecurityScheme` cannot express that: poem-openapi
/// has no `ApiExtractor` for `Option<SecurityScheme>`, and its built-in
/// rejection would answer those requests with a bare 401, without the
/// `WWW-Authenticate` challenge the guarded endpoints must return. So
/// this is a plain `FromRequest` extractor; `Option<BearerAuth>` then
/// yields `None` whenever the bearer credential cannot be extracted.
pub struct BearerAuth(pub Bearer);

impl<'a> FromRequest<'a> for BearerAuth {
    async fn from_request(req: &'a Request, _body: &mut RequestBody) -> poem::Result<Self> {
        <Bearer as BearerAuthorization>::from_request(req).map(BearerAuth)
    }
}

/// Extract the raw token from an optional bearer credential
///
/// An absent credential yields the empty string, which the access guard
/// rejects like any other invalid token.
pub(crate) fn bearer_token(auth: Option<BearerAuth>) -> String {
    auth.map(|a| a.0.token).unwrap_or_default()
}
