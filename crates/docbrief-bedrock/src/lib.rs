//! docbrief-bedrock
//!
//! Bedrock model invocation over the Converse API.

pub mod client;
pub mod error;
pub mod invoke;
