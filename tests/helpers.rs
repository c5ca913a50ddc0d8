// Shared test helpers: a scripted, in-memory resolver.
//
// No test talks to a real nameserver; every answer comes from the script.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use domain_exists::{LookupError, RecordType, Resolver, ResolverFactory};

/// What the scripted resolver does for one (name, type) query.
#[derive(Clone)]
#[allow(dead_code)] // Not every test file uses every variant
pub enum Script {
    Answer(Vec<String>),
    Fail(LookupError),
    Panic,
}

/// Factory whose resolvers answer from a script; unscripted queries get NXDOMAIN.
#[derive(Clone, Default)]
pub struct ScriptedFactory {
    scripts: Arc<HashMap<(String, String), Script>>,
    delays: Arc<HashMap<String, Duration>>,
    default_delay: Option<Duration>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

#[allow(dead_code)] // Used by other test files
impl ScriptedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, name: &str, record_type: &str, values: &[&str]) -> Self {
        let values = values.iter().map(|v| v.to_string()).collect();
        self.script(name, record_type, Script::Answer(values))
    }

    pub fn fail(self, name: &str, record_type: &str, error: LookupError) -> Self {
        self.script(name, record_type, Script::Fail(error))
    }

    pub fn panic_on(self, name: &str, record_type: &str) -> Self {
        self.script(name, record_type, Script::Panic)
    }

    pub fn script(mut self, name: &str, record_type: &str, script: Script) -> Self {
        Arc::make_mut(&mut self.scripts)
            .insert((name.to_string(), record_type.to_string()), script);
        self
    }

    /// Every lookup of `name` sleeps for `delay` before answering.
    pub fn delay_for(mut self, name: &str, delay: Duration) -> Self {
        Arc::make_mut(&mut self.delays).insert(name.to_string(), delay);
        self
    }

    /// Every lookup sleeps for `delay` unless a per-name delay is set.
    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, name: &str) -> usize {
        self.calls().iter().filter(|(n, _)| n == name).count()
    }

    /// Highest number of lookups that were in progress at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn into_arc(self) -> Arc<dyn ResolverFactory> {
        Arc::new(self)
    }
}

impl ResolverFactory for ScriptedFactory {
    fn build(&self, _servers: Option<&[String]>, _timeout: Duration) -> Arc<dyn Resolver> {
        Arc::new(ScriptedResolver {
            factory: self.clone(),
        })
    }
}

struct ScriptedResolver {
    factory: ScriptedFactory,
}

#[async_trait]
impl Resolver for ScriptedResolver {
    async fn lookup(
        &self,
        name: &str,
        record_type: &RecordType,
    ) -> Result<Vec<String>, LookupError> {
        let factory = &self.factory;
        let key = (name.to_string(), record_type.as_str().to_string());
        factory.calls.lock().unwrap().push(key.clone());

        let now = factory.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        factory.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = factory.delays.get(name).copied().or(factory.default_delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        factory.in_flight.fetch_sub(1, Ordering::SeqCst);

        match factory.scripts.get(&key) {
            Some(Script::Answer(values)) => Ok(values.clone()),
            Some(Script::Fail(error)) => Err(error.clone()),
            Some(Script::Panic) => panic!("scripted resolver panic for {name}"),
            None => Err(LookupError::NxDomain),
        }
    }
}
