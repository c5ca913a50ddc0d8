//! Host resolution task tests.

use super::*;
use crate::error_handling::LookupErrorKind;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Answers = HashMap<(String, String), Result<Vec<String>, LookupError>>;

/// Resolver answering from a fixed table; unknown queries get NXDOMAIN.
#[derive(Default, Clone)]
struct StubFactory {
    answers: Arc<Answers>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
    built_with: Arc<Mutex<Vec<Option<Vec<String>>>>>,
    delay: Option<Duration>,
}

struct StubResolver {
    factory: StubFactory,
}

impl StubFactory {
    fn new(entries: Vec<(&str, &str, Result<Vec<String>, LookupError>)>) -> Self {
        let answers = entries
            .into_iter()
            .map(|(name, rtype, answer)| ((name.to_string(), rtype.to_string()), answer))
            .collect();
        Self {
            answers: Arc::new(answers),
            ..Default::default()
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ResolverFactory for StubFactory {
    fn build(&self, servers: Option<&[String]>, _timeout: Duration) -> Arc<dyn Resolver> {
        self.built_with
            .lock()
            .unwrap()
            .push(servers.map(|s| s.to_vec()));
        Arc::new(StubResolver {
            factory: self.clone(),
        })
    }
}

#[async_trait]
impl Resolver for StubResolver {
    async fn lookup(
        &self,
        name: &str,
        record_type: &RecordType,
    ) -> Result<Vec<String>, LookupError> {
        let key = (name.to_string(), record_type.as_str().to_string());
        self.factory.calls.lock().unwrap().push(key.clone());
        if let Some(delay) = self.factory.delay {
            tokio::time::sleep(delay).await;
        }
        self.factory
            .answers
            .get(&key)
            .cloned()
            .unwrap_or(Err(LookupError::NxDomain))
    }
}

fn ok(values: &[&str]) -> Result<Vec<String>, LookupError> {
    Ok(values.iter().map(|v| v.to_string()).collect())
}

fn options(types: &[&str]) -> HostQueryOptions {
    HostQueryOptions {
        record_types: normalize_record_types(types),
        timeout: Duration::from_millis(2000),
        servers: None,
        fast: false,
        require_any: true,
    }
}

fn tags(types: &[RecordType]) -> Vec<&str> {
    types.iter().map(|t| t.as_str()).collect()
}

#[tokio::test]
async fn test_a_record_makes_host_exist() {
    let factory = StubFactory::new(vec![("example.com", "A", ok(&["192.0.2.10"]))]);
    let outcome = resolve_host("example.com", &options(&["A", "AAAA", "CNAME"]), &factory).await;

    assert!(outcome.exists);
    assert_eq!(tags(&outcome.matched_types), vec!["A"]);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].record_type.as_str(), "A");
    assert_eq!(outcome.records[0].value, "192.0.2.10");
    assert!(outcome.error.is_none());
}

#[tokio::test]
async fn test_all_types_queried_without_fast() {
    let factory = StubFactory::new(vec![("example.com", "A", ok(&["192.0.2.10"]))]);
    resolve_host("example.com", &options(&["A", "AAAA", "CNAME"]), &factory).await;
    assert_eq!(factory.calls().len(), 3);
}

#[tokio::test]
async fn test_records_follow_query_order() {
    let factory = StubFactory::new(vec![
        ("example.com", "A", ok(&["192.0.2.10", "192.0.2.11"])),
        ("example.com", "AAAA", ok(&["2001:db8::1"])),
    ]);
    let outcome = resolve_host("example.com", &options(&["AAAA", "A"]), &factory).await;

    assert_eq!(tags(&outcome.matched_types), vec!["AAAA", "A"]);
    let values: Vec<&str> = outcome.records.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(values, vec!["2001:db8::1", "192.0.2.10", "192.0.2.11"]);
}

#[tokio::test]
async fn test_clean_negative_answers_have_no_error() {
    let factory = StubFactory::new(vec![("nothing.example", "AAAA", ok(&[]))]);
    let outcome = resolve_host("nothing.example", &options(&["A", "AAAA", "CNAME"]), &factory).await;

    assert!(!outcome.exists);
    assert!(outcome.matched_types.is_empty());
    assert!(outcome.records.is_empty());
    assert!(outcome.error.is_none());
}

#[tokio::test]
async fn test_first_error_wins() {
    let factory = StubFactory::new(vec![
        ("flaky.example", "A", Err(LookupError::ServerFailure("SERVFAIL".into()))),
        ("flaky.example", "AAAA", Err(LookupError::Refused)),
    ]);
    let outcome = resolve_host("flaky.example", &options(&["A", "AAAA"]), &factory).await;

    assert!(!outcome.exists);
    let error = outcome.error.expect("error should be captured");
    assert_eq!(error.kind, LookupErrorKind::ServerFailure);
}

#[tokio::test]
async fn test_error_dropped_when_host_exists() {
    let factory = StubFactory::new(vec![
        ("mixed.example", "A", Err(LookupError::Timeout(Duration::from_millis(2000)))),
        ("mixed.example", "AAAA", ok(&["2001:db8::2"])),
    ]);
    let outcome = resolve_host("mixed.example", &options(&["A", "AAAA"]), &factory).await;

    assert!(outcome.exists);
    assert!(outcome.error.is_none());
}

#[tokio::test]
async fn test_require_all_needs_every_type() {
    let only_a = StubFactory::new(vec![("web.example", "A", ok(&["192.0.2.1"]))]);
    let mut opts = options(&["A", "MX"]);
    opts.require_any = false;

    let outcome = resolve_host("web.example", &opts, &only_a).await;
    assert!(!outcome.exists);
    assert_eq!(tags(&outcome.matched_types), vec!["A"]);

    let both = StubFactory::new(vec![
        ("mail.example", "A", ok(&["192.0.2.2"])),
        ("mail.example", "MX", ok(&["10 mx.mail.example."])),
    ]);
    let outcome = resolve_host("mail.example", &opts, &both).await;
    assert!(outcome.exists);
    assert_eq!(tags(&outcome.matched_types), vec!["A", "MX"]);
}

#[tokio::test]
async fn test_fast_stops_after_first_match() {
    let factory = StubFactory::new(vec![
        ("example.com", "A", ok(&["192.0.2.10"])),
        ("example.com", "AAAA", ok(&["2001:db8::10"])),
    ]);
    let mut opts = options(&["A", "AAAA", "CNAME"]);
    opts.fast = true;

    let outcome = resolve_host("example.com", &opts, &factory).await;
    assert!(outcome.exists);
    assert_eq!(tags(&outcome.matched_types), vec!["A"]);
    assert_eq!(factory.calls(), vec![("example.com".to_string(), "A".to_string())]);
}

#[tokio::test]
async fn test_empty_type_list_queries_defaults() {
    let factory = StubFactory::new(vec![]);
    let mut opts = options(&["A"]);
    opts.record_types.clear();
    opts.require_any = false;

    let outcome = resolve_host("nothing.example", &opts, &factory).await;
    assert!(!outcome.exists);
    let queried: Vec<String> = factory.calls().into_iter().map(|(_, t)| t).collect();
    assert_eq!(queried, vec!["A", "AAAA", "CNAME"]);
}

#[tokio::test]
async fn test_fast_continues_until_a_match() {
    let factory = StubFactory::new(vec![("v6only.example", "AAAA", ok(&["2001:db8::3"]))]);
    let mut opts = options(&["A", "AAAA", "CNAME"]);
    opts.fast = true;

    let outcome = resolve_host("v6only.example", &opts, &factory).await;
    assert!(outcome.exists);
    assert_eq!(factory.calls().len(), 2);
}

#[tokio::test]
async fn test_fast_ignored_when_all_types_required() {
    let factory = StubFactory::new(vec![
        ("example.com", "A", ok(&["192.0.2.10"])),
        ("example.com", "MX", ok(&["10 mx.example.com."])),
    ]);
    let mut opts = options(&["A", "MX"]);
    opts.fast = true;
    opts.require_any = false;

    let outcome = resolve_host("example.com", &opts, &factory).await;
    assert!(outcome.exists);
    assert_eq!(factory.calls().len(), 2);
}

#[tokio::test]
async fn test_reports_original_name_but_queries_ascii() {
    let factory = StubFactory::new(vec![("xn--mnchen-3ya.de", "A", ok(&["192.0.2.20"]))]);
    let outcome = resolve_host("  münchen.de ", &options(&["A"]), &factory).await;

    assert_eq!(outcome.hostname, "münchen.de");
    assert!(outcome.exists);
    assert_eq!(factory.calls()[0].0, "xn--mnchen-3ya.de");
}

#[tokio::test]
async fn test_servers_passed_to_factory() {
    let factory = StubFactory::new(Vec::new());
    let mut opts = options(&["A"]);
    opts.servers = Some(vec!["192.0.2.53".to_string()]);

    resolve_host("example.com", &opts, &factory).await;
    assert_eq!(
        factory.built_with.lock().unwrap().clone(),
        vec![Some(vec!["192.0.2.53".to_string()])]
    );
}

#[tokio::test(start_paused = true)]
async fn test_slow_lookup_times_out() {
    let factory = StubFactory::new(vec![("slow.example", "A", ok(&["192.0.2.30"]))])
        .with_delay(Duration::from_secs(10));
    let mut opts = options(&["A"]);
    opts.timeout = Duration::from_millis(100);

    let outcome = resolve_host("slow.example", &opts, &factory).await;
    assert!(!outcome.exists);
    let error = outcome.error.expect("timeout should be captured");
    assert_eq!(error.kind, LookupErrorKind::Timeout);
    assert!(error.to_string().contains("100ms"));
}

#[test]
fn test_options_from_request_clamps_timeout() {
    let request = BatchRequest {
        timeout_ms: 5,
        ..BatchRequest::new(["example.com"])
    };
    let opts = HostQueryOptions::from_request(&request);
    assert_eq!(opts.timeout, Duration::from_millis(100));
}

#[test]
fn test_options_from_request_normalizes_types() {
    let request = BatchRequest {
        record_types: vec![" mx".to_string(), "txt ".to_string()],
        ..BatchRequest::new(["example.com"])
    };
    let opts = HostQueryOptions::from_request(&request);
    assert_eq!(tags(&opts.record_types), vec!["MX", "TXT"]);
}
