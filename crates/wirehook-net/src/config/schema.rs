use serde::Deserialize;
use wirehook_core::error::{Result, WireHookError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireHookConfig {
    pub version: u32,

    #[serde(default)]
    pub enforcer: EnforcerSection,
}

impl WireHookConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WireHookError::UnsupportedVersion);
        }

        self.enforcer.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnforcerSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub allow_hosts: Vec<String>,

    #[serde(default)]
    pub deny_hosts: Vec<String>,

    #[serde(default)]
    pub require_https: bool,
}

impl Default for EnforcerSection {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            allow_hosts: Vec::new(),
            deny_hosts: Vec::new(),
            require_https: false,
        }
    }
}

impl EnforcerSection {
    pub fn validate(&self) -> Result<()> {
        for rule in self.allow_hosts.iter().chain(&self.deny_hosts) {
            if rule.trim().is_empty() {
                return Err(WireHookError::BadRequest(
                    "enforcer host rules must not be blank".into(),
                ));
            }
        }
        Ok(())
    }
}

fn default_enabled() -> bool {
    true
}
