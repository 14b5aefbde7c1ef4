//! Error types for engine boundary parsing.
//!
//! The query functions themselves are total (spec'd to degrade to empty/zero
//! results); errors only arise when parsing date/instant strings at the
//! boundary, e.g. in the WASM bindings.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
