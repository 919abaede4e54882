pub mod grant;
pub mod request;
pub mod summary;
