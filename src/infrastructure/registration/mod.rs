//! Registration service implementations

mod http;
mod in_memory;

pub use http::{HttpRegistrationService, REGISTRATION_PATH};
pub use in_memory::InMemoryRegistrationService;
