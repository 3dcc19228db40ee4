pub mod auth;
pub mod comment;
pub mod email;
pub mod like;
pub mod post;
pub mod stats;
