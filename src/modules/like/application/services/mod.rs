pub mod toggle_like_service;

pub use toggle_like_service::ToggleLikeService;
