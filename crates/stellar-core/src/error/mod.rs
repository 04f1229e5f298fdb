use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid date '{value}': {source} {location}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
