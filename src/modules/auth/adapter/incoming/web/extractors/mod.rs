pub mod auth;

pub use auth::{authentication_required, VerifiedUser};
