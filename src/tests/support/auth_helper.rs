use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenProvider};
use crate::tests::support::stubs::{stub_token_provider, StaticBlacklist};

/// Bearer token accepted by [`token_provider_data`].
pub const TEST_TOKEN: &str = "test-access-token";

/// App data resolving any bearer token to a verified `user_id`.
pub fn token_provider_data(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(stub_token_provider(user_id))
}

pub fn blacklist_data() -> web::Data<Arc<dyn TokenBlacklist + Send + Sync>> {
    web::Data::new(Arc::new(StaticBlacklist::empty()) as Arc<dyn TokenBlacklist + Send + Sync>)
}
