//! Document generation service client

mod client;
mod error;
mod traits;

pub use client::{HttpGenerationClient, DEFAULT_BASE_URL};
pub use error::{GenerationError, GENERIC_FAILURE_MESSAGE};
pub use traits::GenerationClientTrait;

#[cfg(test)]
pub use traits::MockGenerationClientTrait;
