use wirehook_core::error::{Result, WireHookError};
use wirehook_core::{Enforcer, Request};

use crate::config::schema::EnforcerSection;

use super::allowlist::{compile_host_rules, is_host_matched, HostRule};

/// Decision from policy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyDecision {
    Pass,
    Reject { reason: String },
}

/// Host policy runtime.
/// Construct once at startup, then hand to the enforcer registry.
#[derive(Debug, Clone)]
pub struct HostPolicy {
    allow: Vec<HostRule>,
    deny: Vec<HostRule>,
    require_https: bool,
}

impl HostPolicy {
    pub fn new(section: &EnforcerSection) -> Result<Self> {
        let allow = compile_host_rules(&section.allow_hosts)?;
        let deny = compile_host_rules(&section.deny_hosts)?;
        if allow.is_empty() {
            tracing::warn!("enforcer.allow_hosts is empty: every round trip will be rejected");
        }
        Ok(Self {
            allow,
            deny,
            require_https: section.require_https,
        })
    }

    /// Scheme check, then deny rules, then allowlist (empty => strict deny).
    pub fn check(&self, req: &Request) -> PolicyDecision {
        if self.require_https && !req.is_https() {
            return PolicyDecision::Reject {
                reason: format!("{} requires https", req.authority()),
            };
        }

        if is_host_matched(&self.deny, req.host(), req.port()) {
            return PolicyDecision::Reject {
                reason: format!("{} is denied", req.authority()),
            };
        }

        if self.allow.is_empty() {
            return PolicyDecision::Reject {
                reason: "allow_hosts empty (strict deny)".into(),
            };
        }

        if !is_host_matched(&self.allow, req.host(), req.port()) {
            return PolicyDecision::Reject {
                reason: format!("{} is not allowed", req.authority()),
            };
        }

        PolicyDecision::Pass
    }

    /// Wrap the policy as a round-trip enforcer.
    pub fn into_enforcer(self) -> Enforcer {
        Enforcer::new(move |req: &Request| match self.check(req) {
            PolicyDecision::Pass => Ok(()),
            PolicyDecision::Reject { reason } => Err(WireHookError::Rejected(reason)),
        })
    }
}
