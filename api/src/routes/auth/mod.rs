//! Authentication route handlers
//!
//! - `POST /api/auth/signup` - create an account and open a session
//! - `POST /api/auth/signin` - open a session for existing credentials
//! - `POST /api/auth/logout` - revoke the presented session token
//! - `GET /api/auth/profile` - the authenticated user's profile

pub mod logout;
pub mod profile;
pub mod signin;
pub mod signup;

pub use logout::logout;
pub use profile::profile;
pub use signin::signin;
pub use signup::signup;
