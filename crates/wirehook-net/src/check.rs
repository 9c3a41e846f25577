//! URL evaluation behind `wirehook-check`.

use serde_json::{json, Value};

use wirehook_core::{EnforcerSlot, Request};

/// Outcome of checking a batch of URLs against a slot.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// One JSON object per URL, in input order.
    pub lines: Vec<Value>,
    pub rejected: usize,
}

impl CheckReport {
    pub fn all_allowed(&self) -> bool {
        self.rejected == 0
    }
}

/// Evaluate each URL as a `GET`. Unparseable URLs count as rejected and carry
/// the `BAD_REQUEST` code.
pub fn check_urls<I>(slot: &EnforcerSlot, urls: I) -> CheckReport
where
    I: IntoIterator<Item = String>,
{
    let mut report = CheckReport::default();
    for url in urls {
        let line = match Request::new("GET", &url).and_then(|req| slot.check(&req)) {
            Ok(()) => json!({ "url": url, "allowed": true, "reason": null }),
            Err(e) => {
                report.rejected += 1;
                json!({
                    "url": url,
                    "allowed": false,
                    "code": e.code().as_str(),
                    "reason": e.to_string(),
                })
            }
        };
        report.lines.push(line);
    }
    report
}
