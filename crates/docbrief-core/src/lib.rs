//! docbrief-core
//!
//! Pure domain types, response normalization, prompt construction, and S3
//! key conventions. No AWS SDK dependency; this is the shared vocabulary of
//! the docbrief system.

pub mod error;
pub mod models;
pub mod normalize;
pub mod prompt;
pub mod s3_keys;
