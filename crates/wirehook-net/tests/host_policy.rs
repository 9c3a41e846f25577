#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wirehook_core::{EnforcerSlot, Request, WireHookError};
use wirehook_net::config::{self, EnforcerSection};
use wirehook_net::install_enforcer;
use wirehook_net::policy::allowlist::{compile_host_rules, is_host_matched, HostPattern};
use wirehook_net::policy::{HostPolicy, PolicyDecision};

fn section(allow: &[&str], deny: &[&str], require_https: bool) -> EnforcerSection {
    EnforcerSection {
        enabled: true,
        allow_hosts: allow.iter().map(|s| s.to_string()).collect(),
        deny_hosts: deny.iter().map(|s| s.to_string()).collect(),
        require_https,
    }
}

fn get(url: &str) -> Request {
    Request::new("GET", url).unwrap()
}

#[test]
fn compiles_wildcards() {
    let rules = compile_host_rules(&["*.example.com:443".into(), "*:*".into()]).unwrap();
    assert_eq!(rules[0].host, HostPattern::Suffix(".example.com".into()));
    assert_eq!(rules[0].port, Some(443));
    assert_eq!(rules[1].host, HostPattern::Any);
    assert_eq!(rules[1].port, None);
}

#[test]
fn rejects_malformed_rules() {
    for bad in ["example.com", ":443", "ex*ample.com:443", "example.com:http"] {
        let err = compile_host_rules(&[bad.to_string()]).unwrap_err();
        assert_eq!(err.code().as_str(), "BAD_REQUEST", "rule={bad}");
    }
}

#[test]
fn suffix_does_not_match_apex() {
    let rules = compile_host_rules(&["*.example.com:*".into()]).unwrap();
    assert!(is_host_matched(&rules, "api.example.com", 443));
    assert!(!is_host_matched(&rules, "example.com", 443));
    assert!(!is_host_matched(&rules, "badexample.com", 443));
}

#[test]
fn deny_wins_over_allow() {
    let p = HostPolicy::new(&section(&["*.example.com:*"], &["admin.example.com:*"], false)).unwrap();
    assert_eq!(p.check(&get("http://api.example.com/")), PolicyDecision::Pass);
    assert!(matches!(
        p.check(&get("http://admin.example.com/")),
        PolicyDecision::Reject { .. }
    ));
}

#[test]
fn require_https_and_port_rules() {
    let p = HostPolicy::new(&section(&["api.example.com:443"], &[], true)).unwrap();
    assert_eq!(p.check(&get("https://api.example.com/")), PolicyDecision::Pass);
    assert_eq!(
        p.check(&get("http://api.example.com:443/")),
        PolicyDecision::Reject { reason: "api.example.com:443 requires https".into() }
    );
    assert_eq!(
        p.check(&get("https://api.example.com:8443/")),
        PolicyDecision::Reject { reason: "api.example.com:8443 is not allowed".into() }
    );
}

#[test]
fn empty_allowlist_is_strict_deny() {
    let p = HostPolicy::new(&section(&[], &[], false)).unwrap();
    assert!(matches!(p.check(&get("http://a.test/")), PolicyDecision::Reject { .. }));
}

#[test]
fn enforcer_maps_reject_to_rejected_error() {
    let e = HostPolicy::new(&section(&["a.test:*"], &[], false)).unwrap().into_enforcer();
    assert!(e.check(&get("http://a.test/")).is_ok());
    match e.check(&get("http://b.test/")) {
        Err(WireHookError::Rejected(reason)) => assert_eq!(reason, "b.test:80 is not allowed"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn install_from_config() {
    let cfg = config::load_from_str(
        "version: 1\nenforcer:\n  allow_hosts: [\"a.test:*\"]\n",
    )
    .unwrap();
    let slot = EnforcerSlot::new();
    assert!(install_enforcer(&cfg, &slot).unwrap());
    assert!(slot.check(&get("http://a.test/")).is_ok());
    assert!(slot.check(&get("http://b.test/")).unwrap_err().is_rejection());
}

#[test]
fn disabled_enforcer_leaves_slot_empty() {
    let cfg = config::load_from_str("version: 1\nenforcer:\n  enabled: false\n").unwrap();
    let slot = EnforcerSlot::new();
    assert!(!install_enforcer(&cfg, &slot).unwrap());
    assert!(!slot.is_set());
    assert!(slot.check(&get("http://anything.test/")).is_ok());
}

#[test]
fn deny_rule_holds_for_url_variants_of_the_same_host() {
    let p = HostPolicy::new(&section(&["*:*"], &["evil.com:*"], false)).unwrap();
    for url in [
        "http://evil.com/",
        "http://x@evil.com/",
        "http://user:pw@evil.com:8080/",
        "http://evil.com?a=1",
        "http://evil.com#f",
        "http://EVIL.com./",
    ] {
        assert!(
            matches!(p.check(&get(url)), PolicyDecision::Reject { .. }),
            "deny rule missed url={url}"
        );
    }
    assert_eq!(p.check(&get("http://good.com/")), PolicyDecision::Pass);
}

#[test]
fn trailing_root_dot_matches_suffix_rules() {
    let rules = compile_host_rules(&["*.example.com:443".into()]).unwrap();
    assert!(is_host_matched(&rules, "api.example.com.", 443));
}
