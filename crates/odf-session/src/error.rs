use odf_core::FlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("aggregation already in flight — re-entrant trigger rejected")]
    AggregationInFlight,

    #[error(transparent)]
    Flow(#[from] FlowError),
}

pub type SessionResult<T> = Result<T, SessionError>;
