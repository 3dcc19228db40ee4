pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, comment, email, like, post, stats};

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::token_blacklist_redis::RedisTokenBlacklist;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::use_cases::{
    DeleteAccountUseCase, LoginUserUseCase, LogoutUserUseCase, VerifyEmailUseCase,
};
use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenProvider};
use crate::auth::application::services::{
    CreateUserService, DeleteAccountService, LoginUserService, LogoutUserService,
    VerifyEmailService,
};
use crate::comment::adapter::outgoing::{CommentQueryPostgres, CommentRepositoryPostgres};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::services::{
    AddCommentService, AddReplyService, DeleteCommentService, GetCommentsService,
};
use crate::config::{AppConfig, SmtpSettings};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::{CommentNotifier, EmailSender};
use crate::email::application::services::UserEmailService;
use crate::like::adapter::outgoing::LikeRepositoryPostgres;
use crate::like::application::ports::incoming::use_cases::ToggleLikeUseCase;
use crate::like::application::services::ToggleLikeService;
use crate::post::adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres};
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::services::{
    CreatePostService, DeletePostService, GetPostService, ListPostsService, UpdatePostService,
};
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::stats::adapter::outgoing::StatsQueryPostgres;
use crate::stats::application::ports::incoming::use_cases::GetStatsUseCase;
use crate::stats::application::services::GetStatsService;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub verify_email_use_case: Arc<dyn VerifyEmailUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn LogoutUserUseCase + Send + Sync>,
    pub delete_account_use_case: Arc<dyn DeleteAccountUseCase + Send + Sync>,
    pub post: PostUseCases,
    pub comment: CommentUseCases,
    pub toggle_like_use_case: Arc<dyn ToggleLikeUseCase + Send + Sync>,
    pub stats_use_case: Arc<dyn GetStatsUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    info!(env = %config.rust_env, "Starting admissions tracker");

    // SMTP
    let smtp_sender = match &config.smtp {
        SmtpSettings::Local { host, port } => {
            SmtpEmailSender::new_local(host, *port, &config.email_from)
        }
        SmtpSettings::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &config.email_from)
            .expect("Failed to configure SMTP relay"),
    };
    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");
    let redis_arc = Arc::new(redis_pool);

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let token_blacklist: Arc<dyn TokenBlacklist + Send + Sync> =
        Arc::new(RedisTokenBlacklist::new(Arc::clone(&redis_arc)));
    let password_hasher = Arc::new(Argon2Hasher::from_env().expect("Invalid Argon2 parameters"));

    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_email_service = Arc::new(UserEmailService::new(
        email_sender,
        config.app_url.clone(),
    ));

    let register_user_orchestrator = UserRegistrationOrchestrator::new(
        Arc::new(CreateUserService::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher.clone(),
        )),
        user_email_service.clone(),
    );
    let verify_email_use_case = VerifyEmailService::new(user_repo.clone());
    let login_user_use_case =
        LoginUserService::new(user_query, password_hasher, Arc::clone(&token_provider));
    let logout_user_use_case =
        LogoutUserService::new(Arc::clone(&token_provider), Arc::clone(&token_blacklist));
    let delete_account_use_case = DeleteAccountService::new(
        user_repo,
        Arc::clone(&token_provider),
        Arc::clone(&token_blacklist),
    );

    // Posts
    let post_query = PostQueryPostgres::new(Arc::clone(&db_arc));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db_arc));
    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(post_repo.clone())),
        get_single: Arc::new(GetPostService::new(post_query.clone())),
        get_list: Arc::new(ListPostsService::new(post_query.clone())),
        update: Arc::new(UpdatePostService::new(post_query.clone(), post_repo.clone())),
        delete: Arc::new(DeletePostService::new(post_query, post_repo)),
    };

    // Comments
    let comment_query = CommentQueryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_notifier: Arc<dyn CommentNotifier + Send + Sync> = user_email_service;
    let comment = CommentUseCases {
        add_comment: Arc::new(AddCommentService::new(
            comment_query.clone(),
            comment_repo.clone(),
            Arc::clone(&comment_notifier),
        )),
        add_reply: Arc::new(AddReplyService::new(
            comment_query.clone(),
            comment_repo.clone(),
            comment_notifier,
        )),
        get_comments: Arc::new(GetCommentsService::new(comment_query.clone())),
        delete: Arc::new(DeleteCommentService::new(comment_query, comment_repo)),
    };

    // Likes & stats
    let toggle_like_use_case =
        ToggleLikeService::new(LikeRepositoryPostgres::new(Arc::clone(&db_arc)));
    let stats_use_case = GetStatsService::new(StatsQueryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        verify_email_use_case: Arc::new(verify_email_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        delete_account_use_case: Arc::new(delete_account_use_case),
        post,
        comment,
        toggle_like_use_case: Arc::new(toggle_like_use_case),
        stats_use_case: Arc::new(stats_use_case),
    };

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&token_blacklist)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_user_email_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::delete_account_handler);
    // Posts
    cfg.service(crate::post::adapter::incoming::web::routes::create_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::list_posts_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::get_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::update_post_handler);
    cfg.service(crate::post::adapter::incoming::web::routes::delete_post_handler);
    // Comments
    cfg.service(crate::comment::adapter::incoming::web::routes::add_comment_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::add_reply_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::get_comments_handler);
    cfg.service(crate::comment::adapter::incoming::web::routes::delete_comment_handler);
    // Likes
    cfg.service(crate::like::adapter::incoming::web::routes::toggle_like_handler);
    // Stats
    cfg.service(crate::stats::adapter::incoming::web::routes::get_stats_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
