//! Translation of domain outcomes into HTTP responses

pub mod error;

pub use error::{handle_domain_error, json_error_handler, unauthorized_response};
