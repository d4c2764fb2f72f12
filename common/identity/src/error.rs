use thiserror::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Failure to extract an identity from a bearer token. Always fatal to the
/// login attempt that produced the token; never retried.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token must have 3 dot-separated segments, found {0}")]
    SegmentCount(usize),
    #[error("failed to decode token payload: {0}")]
    Payload(String),
    #[error("malformed claim payload: {0}")]
    InvalidJson(String),
    #[error("token payload missing subject claim")]
    MissingSubject,
}
