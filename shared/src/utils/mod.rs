//! Common utility functions

pub mod mask;
pub mod sanitize;

pub use mask::mask_email;
pub use sanitize::{contains_malicious_content, decode_html_entities, sanitize_str};
