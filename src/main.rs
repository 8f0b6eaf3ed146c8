pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::post;
pub use modules::profile;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::orchestrator::account_deletion::AccountDeletionOrchestrator;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::{
    fetch_current_user::FetchCurrentUserService, login_user::LoginUserService,
    register_user::RegisterUserService,
};

use crate::post::adapter::outgoing::post_repository_postgres::PostRepositoryPostgres;
use crate::post::application::post_use_cases::PostUseCases;
use crate::post::application::service::{
    CreatePostService, DeletePostService, GetPostsService, PostCommentsService, PostLikesService,
};

use crate::profile::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::profile::application::service::{
    GetProfileService, ProfileEntriesService, ProfileViews, UpsertProfileService,
};

use crate::shared::api::{custom_json_config, custom_path_config};
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub profile: ProfileUseCases,
    pub post: PostUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Loads .env.{RUST_ENV}, falling back to .env
    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_query = Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let user_repo = Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));
    let profile_repo = Arc::new(ProfileRepositoryPostgres::new(Arc::clone(&db_arc)));
    let post_repo = Arc::new(PostRepositoryPostgres::new(Arc::clone(&db_arc)));
    let password_hasher = Arc::new(BcryptHasher::new(config.bcrypt_cost));
    let jwt_service = Arc::new(JwtTokenService::new(jwt_config));
    let attempts = config.max_write_attempts;

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            password_hasher.clone(),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            password_hasher,
            jwt_service.clone(),
        )),
        current_user: Arc::new(FetchCurrentUserService::new(user_query.clone())),
        delete_account: Arc::new(AccountDeletionOrchestrator::new(
            user_query.clone(),
            user_repo,
            profile_repo.clone(),
            post_repo.clone(),
            config.authored_posts_policy,
            attempts,
        )),
    };

    let views = ProfileViews::new(user_query);
    let profile = ProfileUseCases {
        get: Arc::new(GetProfileService::new(profile_repo.clone(), views.clone())),
        upsert: Arc::new(UpsertProfileService::new(
            profile_repo.clone(),
            views.clone(),
            attempts,
        )),
        entries: Arc::new(ProfileEntriesService::new(profile_repo, views, attempts)),
    };

    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(post_repo.clone())),
        get: Arc::new(GetPostsService::new(post_repo.clone())),
        delete: Arc::new(DeletePostService::new(post_repo.clone())),
        likes: Arc::new(PostLikesService::new(post_repo.clone(), attempts)),
        comments: Arc::new(PostCommentsService::new(post_repo, attempts)),
    };

    let state = AppState {
        auth,
        profile,
        post,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = jwt_service;
    let server_url = config.server_url();
    info!(
        server_url = %server_url,
        posts_policy = ?config.authored_posts_policy,
        "Server listening"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .bind(&server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::post::adapter::incoming::web::routes as post_routes;
    use crate::profile::adapter::incoming::web::routes as profile_routes;

    // Health & docs
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::api::openapi::openapi_json);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::current_user_handler);
    // Profile: fixed paths before the parameterised ones
    cfg.service(profile_routes::get_all_profiles_handler);
    cfg.service(profile_routes::get_profile_by_handle_handler);
    cfg.service(profile_routes::get_profile_by_user_handler);
    cfg.service(profile_routes::get_current_profile_handler);
    cfg.service(profile_routes::upsert_profile_handler);
    cfg.service(profile_routes::delete_account_handler);
    cfg.service(profile_routes::add_experience_handler);
    cfg.service(profile_routes::remove_experience_handler);
    cfg.service(profile_routes::add_education_handler);
    cfg.service(profile_routes::remove_education_handler);
    // Posts
    cfg.service(post_routes::get_posts_handler);
    cfg.service(post_routes::create_post_handler);
    cfg.service(post_routes::like_post_handler);
    cfg.service(post_routes::unlike_post_handler);
    cfg.service(post_routes::add_comment_handler);
    cfg.service(post_routes::remove_comment_handler);
    cfg.service(post_routes::get_post_handler);
    cfg.service(post_routes::delete_post_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
