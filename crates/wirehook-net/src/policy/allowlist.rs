//! Host rule compilation and matching.
//!
//! Rule format is `host:port`. Either side may be `*`; a host starting with
//! `*.` matches any subdomain (not the apex).

use wirehook_core::error::{Result, WireHookError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    Any,
    Exact(String),
    /// Stored with the leading dot, e.g. `.example.com`.
    Suffix(String),
}

/// Compiled host rule.
#[derive(Debug, Clone)]
pub struct HostRule {
    pub host: HostPattern,
    pub port: Option<u16>, // None => wildcard
}

pub fn compile_host_rules(raw: &[String]) -> Result<Vec<HostRule>> {
    let mut out = Vec::with_capacity(raw.len());
    for s in raw {
        let (host_s, port_s) = s.rsplit_once(':').ok_or_else(|| {
            WireHookError::BadRequest(format!("invalid host rule: {s} (expected host:port)"))
        })?;

        let host = match host_s {
            "" => {
                return Err(WireHookError::BadRequest(format!("invalid host rule: {s} (empty host)")))
            }
            "*" => HostPattern::Any,
            h if h.starts_with("*.") && h.len() > 2 => {
                HostPattern::Suffix(h[1..].to_ascii_lowercase())
            }
            h if h.contains('*') => {
                return Err(WireHookError::BadRequest(format!(
                    "invalid host rule: {s} (wildcard must be a leading '*.')"
                )))
            }
            h => HostPattern::Exact(h.to_ascii_lowercase()),
        };

        let port = if port_s == "*" {
            None
        } else {
            Some(port_s.parse().map_err(|_| {
                WireHookError::BadRequest(format!("invalid host rule port: {port_s}"))
            })?)
        };

        out.push(HostRule { host, port });
    }
    Ok(out)
}

/// `host` is expected lowercase (as produced by `Request::new`). A trailing
/// root dot is ignored: `example.com.` dials the same host as `example.com`.
pub fn is_host_matched(rules: &[HostRule], host: &str, port: u16) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    rules.iter().any(|r| {
        let host_ok = match &r.host {
            HostPattern::Any => true,
            HostPattern::Exact(h) => h == host,
            HostPattern::Suffix(sfx) => host.ends_with(sfx.as_str()),
        };
        if !host_ok {
            return false;
        }
        match r.port {
            None => true,
            Some(p) => p == port,
        }
    })
}
