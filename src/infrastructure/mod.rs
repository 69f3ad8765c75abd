//! Infrastructure layer - Registration transport and process plumbing

pub mod http_client;
pub mod logging;
pub mod registration;
