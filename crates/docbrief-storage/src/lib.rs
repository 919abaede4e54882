//! docbrief-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK: fetch uploaded
//! documents, issue presigned upload URLs.

pub mod client;
pub mod error;
pub mod objects;
