//! `hickory-resolver` implementation of the resolver capability.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::RecordType as WireRecordType;
use hickory_resolver::TokioAsyncResolver;

use crate::dns::{RecordType, Resolver, ResolverFactory};
use crate::error_handling::LookupError;
use crate::initialization::init_resolver;

/// Builds a fresh `TokioAsyncResolver` per host task.
///
/// Nothing is cached across tasks or batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct HickoryResolverFactory;

impl ResolverFactory for HickoryResolverFactory {
    fn build(&self, servers: Option<&[String]>, timeout: Duration) -> Arc<dyn Resolver> {
        Arc::new(HickoryResolver {
            inner: init_resolver(servers, timeout),
            timeout,
        })
    }
}

/// Resolver backed by `hickory-resolver`.
pub struct HickoryResolver {
    inner: TokioAsyncResolver,
    timeout: Duration,
}

#[async_trait]
impl Resolver for HickoryResolver {
    async fn lookup(
        &self,
        name: &str,
        record_type: &RecordType,
    ) -> Result<Vec<String>, LookupError> {
        let wire_type = wire_record_type(record_type)?;
        match self.inner.lookup(name, wire_type).await {
            Ok(lookup) => Ok(lookup
                .iter()
                .filter(|rdata| rdata.record_type() == wire_type)
                .map(|rdata| rdata.to_string())
                .collect()),
            Err(e) => classify_resolve_error(&e, self.timeout),
        }
    }
}

/// Maps a tag to hickory's record type.
pub(crate) fn wire_record_type(record_type: &RecordType) -> Result<WireRecordType, LookupError> {
    match WireRecordType::from_str(record_type.as_str()) {
        Ok(WireRecordType::Unknown(_)) | Err(_) => Err(LookupError::UnsupportedRecordType(
            record_type.to_string(),
        )),
        Ok(wire_type) => Ok(wire_type),
    }
}

/// Sorts a hickory error into the lookup taxonomy.
///
/// A NOERROR response without records is not an error: it yields an empty
/// answer list.
pub(crate) fn classify_resolve_error(
    error: &ResolveError,
    timeout: Duration,
) -> Result<Vec<String>, LookupError> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            classify_response_code(*response_code)
        }
        ResolveErrorKind::Timeout => Err(LookupError::Timeout(timeout)),
        ResolveErrorKind::NoConnections => Err(LookupError::Transport(error.to_string())),
        ResolveErrorKind::Io(e) => Err(LookupError::Transport(e.to_string())),
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout => Err(LookupError::Timeout(timeout)),
            _ => Err(LookupError::Protocol(proto.to_string())),
        },
        _ => Err(LookupError::Other(error.to_string())),
    }
}

pub(crate) fn classify_response_code(code: ResponseCode) -> Result<Vec<String>, LookupError> {
    match code {
        ResponseCode::NoError => Ok(Vec::new()),
        ResponseCode::NXDomain => Err(LookupError::NxDomain),
        ResponseCode::Refused => Err(LookupError::Refused),
        other => Err(LookupError::ServerFailure(other.to_string())),
    }
}
