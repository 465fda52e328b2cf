//! HTTP plumbing shared by the session client.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use eventia_core::error::{TransportError, ValidationError};
use eventia_core::{AccessToken, ApiUrl, Error, Result};

/// Map a reqwest failure onto the transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

/// Method, body and extra headers for an authorized request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    /// A bodiless GET.
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST carrying `body` as JSON.
    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    /// Add a header. `Authorization` is managed by the session and ignored here.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Thin wrapper over a `reqwest::Client` bound to one API base URL.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl ApiClient {
    pub fn new(api: ApiUrl, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, api })
    }

    pub fn api_url(&self) -> &ApiUrl {
        &self.api
    }

    /// POST a JSON body without credentials.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn post_json<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "POST");

        self.client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)
    }

    /// Send a request, attaching `token` as a bearer credential when given.
    #[instrument(skip(self, options, token), fields(api = %self.api, method = %options.method))]
    pub async fn send(
        &self,
        path: &str,
        options: &RequestOptions,
        token: Option<&AccessToken>,
    ) -> Result<Response> {
        let url = self.api.endpoint(path);
        debug!(%url, authorized = token.is_some(), "sending request");

        let mut request = self
            .client
            .request(options.method.clone(), &url)
            .headers(build_headers(&options.headers, token)?);

        if let Some(ref body) = options.body {
            request = request.body(body.to_string());
        }

        request.send().await.map_err(transport_error)
    }
}

/// Default content type, then caller headers, then the bearer token.
fn build_headers(extra: &[(String, String)], token: Option<&AccessToken>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ValidationError::Invalid {
                field: "header name",
                reason: e.to_string(),
            }
        })?;
        if name == AUTHORIZATION {
            trace!("ignoring caller-supplied Authorization header");
            continue;
        }
        let value = HeaderValue::from_str(value).map_err(|e| ValidationError::Invalid {
            field: "header value",
            reason: e.to_string(),
        })?;
        headers.insert(name, value);
    }

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(
            |_| Error::invalid_response("access token contains characters not allowed in a header"),
        )?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// The server's error message: `message`, else a string `detail`.
pub(crate) async fn error_message(response: Response) -> Option<String> {
    let body: Value = response.json().await.ok()?;
    ["message", "detail"].iter().find_map(|key| {
        body.get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Parse a success body as JSON. An empty body is `null`.
pub(crate) async fn decode_body(response: Response) -> Result<Value> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&bytes).map_err(|e| Error::invalid_response(e.to_string()))
}
