pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::lists;
pub use modules::users;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::BcryptHasher;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::use_cases::{ILoginUserUseCase, LoginUserUseCase};
use crate::lists::adapter::outgoing::{ListQueryPostgres, ListRepositoryPostgres};
use crate::lists::application::use_cases::{
    ArchiveListUseCase, CreateItemUseCase, CreateListUseCase, DeleteItemUseCase,
    DeleteListUseCase, FetchItemsUseCase, FetchListUseCase, FetchListsUseCase,
    IArchiveListUseCase, ICreateItemUseCase, ICreateListUseCase, IDeleteItemUseCase,
    IDeleteListUseCase, IFetchItemsUseCase, IFetchListUseCase, IFetchListsUseCase,
    IToggleItemUseCase, IUpdateItemUseCase, IUpdateListUseCase, ToggleItemUseCase,
    UpdateItemUseCase, UpdateListUseCase,
};
use crate::users::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::users::application::ports::outgoing::UserQuery;
use crate::users::application::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, FetchUserUseCase, ICreateUserUseCase,
    IDeleteUserUseCase, IFetchUserUseCase, IListUsersUseCase, ISetUserActiveUseCase,
    IUpdateUserUseCase, ListUsersUseCase, SetUserActiveUseCase, UpdateUserUseCase,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn IFetchUserUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    pub set_user_active_use_case: Arc<dyn ISetUserActiveUseCase + Send + Sync>,
    pub user_query: Arc<dyn UserQuery + Send + Sync>,
    pub create_list_use_case: Arc<dyn ICreateListUseCase + Send + Sync>,
    pub fetch_lists_use_case: Arc<dyn IFetchListsUseCase + Send + Sync>,
    pub fetch_list_use_case: Arc<dyn IFetchListUseCase + Send + Sync>,
    pub update_list_use_case: Arc<dyn IUpdateListUseCase + Send + Sync>,
    pub archive_list_use_case: Arc<dyn IArchiveListUseCase + Send + Sync>,
    pub delete_list_use_case: Arc<dyn IDeleteListUseCase + Send + Sync>,
    pub create_item_use_case: Arc<dyn ICreateItemUseCase + Send + Sync>,
    pub fetch_items_use_case: Arc<dyn IFetchItemsUseCase + Send + Sync>,
    pub update_item_use_case: Arc<dyn IUpdateItemUseCase + Send + Sync>,
    pub toggle_item_use_case: Arc<dyn IToggleItemUseCase + Send + Sync>,
    pub delete_item_use_case: Arc<dyn IDeleteItemUseCase + Send + Sync>,
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

    info!("Starting application...");

    let config = config::AppConfig::from_env();
    let server_url = config.server_addr();

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

    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(jwt_service);

    let password_hasher = Arc::new(BcryptHasher);
    let password_policy = Arc::new(BasicPasswordPolicy);

    let user_query = Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let user_repo = Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));
    let list_query = Arc::new(ListQueryPostgres::new(Arc::clone(&db_arc)));
    let list_repo = Arc::new(ListRepositoryPostgres::new(Arc::clone(&db_arc)));

    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
        token_provider_arc.clone(),
    );
    let create_user_use_case = CreateUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_policy.clone(),
        password_hasher.clone(),
    );
    let update_user_use_case = UpdateUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_policy.clone(),
        password_hasher.clone(),
    );
    let fetch_user_use_case = FetchUserUseCase::new(user_query.clone());
    let list_users_use_case = ListUsersUseCase::new(user_query.clone());
    let delete_user_use_case = DeleteUserUseCase::new(user_repo.clone());
    let set_user_active_use_case = SetUserActiveUseCase::new(user_repo.clone());

    let create_list_use_case = CreateListUseCase::new(list_repo.clone());
    let fetch_lists_use_case = FetchListsUseCase::new(list_query.clone());
    let fetch_list_use_case = FetchListUseCase::new(list_query.clone());
    let update_list_use_case = UpdateListUseCase::new(list_query.clone(), list_repo.clone());
    let archive_list_use_case = ArchiveListUseCase::new(list_query.clone(), list_repo.clone());
    let delete_list_use_case = DeleteListUseCase::new(list_query.clone(), list_repo.clone());
    let create_item_use_case = CreateItemUseCase::new(list_query.clone(), list_repo.clone());
    let fetch_items_use_case = FetchItemsUseCase::new(list_query.clone());
    let update_item_use_case = UpdateItemUseCase::new(list_query.clone(), list_repo.clone());
    let toggle_item_use_case = ToggleItemUseCase::new(list_query.clone(), list_repo.clone());
    let delete_item_use_case = DeleteItemUseCase::new(list_query.clone(), list_repo.clone());

    let state = AppState {
        login_user_use_case: Arc::new(login_user_use_case),
        create_user_use_case: Arc::new(create_user_use_case),
        fetch_user_use_case: Arc::new(fetch_user_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        update_user_use_case: Arc::new(update_user_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
        set_user_active_use_case: Arc::new(set_user_active_use_case),
        user_query,
        create_list_use_case: Arc::new(create_list_use_case),
        fetch_lists_use_case: Arc::new(fetch_lists_use_case),
        fetch_list_use_case: Arc::new(fetch_list_use_case),
        update_list_use_case: Arc::new(update_list_use_case),
        archive_list_use_case: Arc::new(archive_list_use_case),
        delete_list_use_case: Arc::new(delete_list_use_case),
        create_item_use_case: Arc::new(create_item_use_case),
        fetch_items_use_case: Arc::new(fetch_items_use_case),
        update_item_use_case: Arc::new(update_item_use_case),
        toggle_item_use_case: Arc::new(toggle_item_use_case),
        delete_item_use_case: Arc::new(delete_item_use_case),
    };

    info!(
        addr = %server_url,
        auth_rpm = config.rate_limits.auth_per_minute,
        general_rpm = config.rate_limits.general_per_minute,
        "Server starting"
    );

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
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
    cfg.service(crate::health::welcome);
    cfg.service(crate::health::api_status);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Users
    cfg.service(crate::users::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::delete_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::activate_user_handler);
    cfg.service(crate::users::adapter::incoming::web::routes::deactivate_user_handler);
    // Lists
    cfg.service(crate::lists::adapter::incoming::web::routes::create_list_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::list_lists_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::get_list_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::update_list_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::delete_list_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::archive_list_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::unarchive_list_handler);
    // Items
    cfg.service(crate::lists::adapter::incoming::web::routes::create_item_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::list_items_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::update_item_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::toggle_item_handler);
    cfg.service(crate::lists::adapter::incoming::web::routes::delete_item_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
