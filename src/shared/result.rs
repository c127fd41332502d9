use super::error::FetchError;

pub type AppResult<T, E = FetchError> = Result<T, E>;
