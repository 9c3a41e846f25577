#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use wirehook_core::{ErrorCode, Request, Scope};

struct Tag;

#[test]
fn parses_default_ports_and_path() {
    let r = Request::new("get", "HTTPS://Api.Example.com").unwrap();
    assert_eq!(r.method(), "GET");
    assert_eq!(r.scheme(), "https");
    assert_eq!(r.host(), "api.example.com");
    assert_eq!(r.port(), 443);
    assert_eq!(r.path(), "/");
    assert_eq!(r.authority(), "api.example.com:443");
    assert!(r.is_https());

    let r = Request::new("POST", "http://10.0.0.1:8080/v1/items?x=1").unwrap();
    assert_eq!(r.port(), 8080);
    assert_eq!(r.path(), "/v1/items?x=1");
}

#[test]
fn ipv6_literal_without_port() {
    let r = Request::new("GET", "http://[::1]/").unwrap();
    assert_eq!(r.host(), "[::1]");
    assert_eq!(r.port(), 80);
}

#[test]
fn rejects_malformed_urls() {
    for bad in [
        "example.com",
        "ftp://example.com/",
        "http://",
        "http://h:99999/",
        "http://h:0/",
        "https://h:0",
    ] {
        let err = Request::new("GET", bad).unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest, "url={bad}");
    }
}

#[test]
fn carries_headers_and_scope() {
    let scope = Scope::root().with_value::<Tag, u8>(3);
    let r = Request::new("GET", "http://a.test/")
        .unwrap()
        .with_header("X-Proxy", "corp")
        .with_scope(scope);
    assert_eq!(r.header("x-proxy"), Some("corp"));
    assert_eq!(*r.scope().value::<Tag, u8>().unwrap(), 3);
}

#[test]
fn userinfo_query_and_fragment_stay_out_of_the_host() {
    let r = Request::new("GET", "http://x:pw@Evil.com/").unwrap();
    assert_eq!(r.host(), "evil.com");
    assert_eq!(r.authority(), "evil.com:80");

    let r = Request::new("GET", "http://evil.com?a=1").unwrap();
    assert_eq!(r.host(), "evil.com");
    assert_eq!(r.path(), "/?a=1");

    let r = Request::new("GET", "http://evil.com#frag").unwrap();
    assert_eq!(r.host(), "evil.com");
    assert_eq!(r.path(), "/");
}

#[test]
fn explicit_default_port_is_kept() {
    let r = Request::new("GET", "https://a.test:443/").unwrap();
    assert_eq!(r.port(), 443);
    let r = Request::new("GET", "http://[::1]:8080/x").unwrap();
    assert_eq!(r.host(), "[::1]");
    assert_eq!(r.port(), 8080);
}
