//! Minimal request/response values handed to the enforcer and transports.

use bytes::Bytes;
use url::Url;

use crate::error::{Result, WireHookError};
use crate::scope::Scope;

/// One outbound HTTP request attempt, as seen by the enforcer.
#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    scheme: String,
    host: String,
    port: u16,
    path: String,
    headers: Vec<(String, String)>,
    scope: Scope,
}

impl Request {
    /// Parse an absolute `http`/`https` URL.
    ///
    /// Userinfo and fragment are dropped; they never reach the wire authority.
    /// Port 0 is not dialable and is rejected.
    pub fn new(method: &str, url: &str) -> Result<Self> {
        if method.is_empty() {
            return Err(WireHookError::BadRequest("empty method".into()));
        }

        let parsed = Url::parse(url)
            .map_err(|e| WireHookError::BadRequest(format!("invalid url {url}: {e}")))?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(WireHookError::BadRequest(format!("unsupported scheme: {scheme}")));
        }

        let host = match parsed.host_str() {
            Some(h) if !h.is_empty() => h,
            _ => return Err(WireHookError::BadRequest(format!("empty host: {url}"))),
        };

        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| WireHookError::BadRequest(format!("no port for: {url}")))?;
        if port == 0 {
            return Err(WireHookError::BadRequest(format!("invalid port 0: {url}")));
        }

        let mut path = parsed.path().to_string();
        if let Some(q) = parsed.query() {
            path.push('?');
            path.push_str(q);
        }

        Ok(Self {
            method: method.to_ascii_uppercase(),
            scheme: scheme.to_string(),
            host: host.to_ascii_lowercase(),
            port,
            path,
            headers: Vec::new(),
            scope: Scope::root(),
        })
    }

    /// Run the request under `scope` (trace bindings, caller values).
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }
    pub fn scheme(&self) -> &str {
        &self.scheme
    }
    pub fn host(&self) -> &str {
        &self.host
    }
    pub fn port(&self) -> u16 {
        self.port
    }
    pub fn path(&self) -> &str {
        &self.path
    }
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header value matching `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// `host:port`.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_https(&self) -> bool {
        self.scheme == "https"
    }
}

/// Response produced by a round trip.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
