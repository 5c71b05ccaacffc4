//! REST helpers for communicating with the HAMS backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: [`BrowserTransport`] returns
//! [`ApiError::Network`] since these endpoints are only meaningful in the
//! browser. Tests substitute their own [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses are classified by [`ApiError::from_status`] so pages
//! can show the 401/403/409/offline messages without inspecting responses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use session::{ApiError, AuthBackend, AuthResponse, Credentials, Role, SessionManager, authenticator};

use crate::config::{self, AppConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// One outgoing request, fully resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

/// Sends requests and returns the body text of successful responses.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<String, ApiError>>;
}

/// `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let ApiRequest {
                method,
                url,
                body,
                headers,
            } = request;
            let method = match method {
                HttpMethod::Get => Method::GET,
                HttpMethod::Post => Method::POST,
                HttpMethod::Put => Method::PUT,
                HttpMethod::Delete => Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&url).method(method);
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }
            let built = match body {
                Some(payload) => builder.header("Content-Type", "application/json").body(payload),
                None => builder.build(),
            }
            .map_err(|err| ApiError::Decode(format!("failed to build request: {err}")))?;

            let response = built.send().await.map_err(|err| {
                log::warn!("request to {url} failed: {err}");
                ApiError::Network(err.to_string())
            })?;
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            if response.ok() {
                Ok(text)
            } else {
                Err(ApiError::from_status(status, &text))
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

/// [`AuthBackend`] over HTTP. Login and patient registration are anonymous
/// calls, so no session is attached.
#[derive(Clone, Debug)]
pub struct HttpBackend<T = BrowserTransport> {
    config: AppConfig,
    transport: T,
}

impl HttpBackend {
    pub fn new(config: AppConfig) -> Self {
        Self::with_transport(config, BrowserTransport)
    }
}

impl<T> HttpBackend<T> {
    pub fn with_transport(config: AppConfig, transport: T) -> Self {
        Self { config, transport }
    }
}

impl<T: Transport> AuthBackend for HttpBackend<T> {
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest {
            method: HttpMethod::Post,
            url: self.config.url(config::login_endpoint(role)),
            body: Some(encode(credentials)?),
            headers: Vec::new(),
        };
        let body = self.transport.send(request).await?;
        Ok(AuthResponse::from_body(&body))
    }

    async fn register<R: Serialize>(&self, role: Role, request: &R) -> Result<AuthResponse, ApiError> {
        let Some(path) = config::register_endpoint(role) else {
            return Err(registration_unavailable(role));
        };
        let request = ApiRequest {
            method: HttpMethod::Post,
            url: self.config.url(path),
            body: Some(encode(request)?),
            headers: Vec::new(),
        };
        let body = self.transport.send(request).await?;
        Ok(AuthResponse::from_body(&body))
    }
}

/// Authenticated calls against the API base URL.
///
/// Every request carries the bearer header chosen by the session manager,
/// if any role holds a usable token.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    config: AppConfig,
    manager: SessionManager,
    transport: T,
}

impl ApiClient {
    pub fn new(config: AppConfig, manager: SessionManager) -> Self {
        Self::with_transport(config, manager, BrowserTransport)
    }
}

impl<T> ApiClient<T> {
    pub fn with_transport(config: AppConfig, manager: SessionManager, transport: T) -> Self {
        Self {
            config,
            manager,
            transport,
        }
    }

    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }
}

impl<T: Transport> ApiClient<T> {
    /// Send a request and return the raw body text.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for transport failures and
    /// non-success statuses.
    pub async fn request_text<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let mut headers = Vec::new();
        authenticator::attach(&self.manager, &mut headers);
        let request = ApiRequest {
            method,
            url: self.config.url(path),
            body: body.map(encode).transpose()?,
            headers,
        };
        self.transport.send(request).await
    }

    /// Send a request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request_text`]; undecodable bodies give
    /// [`ApiError::Decode`].
    pub async fn request_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ApiError> {
        let text = self.request_text(method, path, body).await?;
        parse_body(&text)
    }

    /// Authenticated `GET` returning JSON.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request_json`].
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request_json::<(), R>(HttpMethod::Get, path, None).await
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|err| ApiError::Decode(format!("failed to encode request: {err}")))
}

/// Decode a response body; an empty body decodes as JSON `null`.
fn parse_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|err| ApiError::Decode(err.to_string()))
}

fn registration_unavailable(role: Role) -> ApiError {
    ApiError::Http {
        status: 405,
        message: format!("{} accounts cannot be registered here", role.as_str().to_lowercase()),
    }
}
