pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("query is empty after normalization")]
    EmptyQuery,

    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("unknown search mode: {0}")]
    UnknownMode(String),
}
