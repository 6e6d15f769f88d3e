use std::collections::HashMap;
use std::sync::Arc;

use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use staff_service::config::Config;
use staff_service::domain::auth::service::AuthService;
use staff_service::domain::staff::models::Role;
use staff_service::domain::staff::service::StaffService;
use staff_service::domain::vacation::service::VacationService;
use staff_service::inbound::http::router::create_router;
use staff_service::inbound::http::router::AppState;
use staff_service::outbound::email::SmtpNotifier;
use staff_service::outbound::repositories::PostgresStaffRepository;
use staff_service::outbound::repositories::PostgresVacationRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staff_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "staff-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        smtp_host = %config.email.smtp_host,
        token_validity_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // The signing secret is read once here and never reloaded mid-process
    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));

    let notifier = Arc::new(SmtpNotifier::new(&config.email)?);

    let admins_repo = Arc::new(PostgresStaffRepository::new(pg_pool.clone(), Role::Admin));
    let directors_repo = Arc::new(PostgresStaffRepository::new(
        pg_pool.clone(),
        Role::Director,
    ));
    let kadrs_repo = Arc::new(PostgresStaffRepository::new(pg_pool.clone(), Role::Kadr));
    let users_repo = Arc::new(PostgresStaffRepository::new(pg_pool.clone(), Role::User));
    let vacations_repo = Arc::new(PostgresVacationRepository::new(pg_pool.clone()));

    let directories = HashMap::from([
        (Role::Admin, Arc::clone(&admins_repo)),
        (Role::Director, Arc::clone(&directors_repo)),
        (Role::Kadr, Arc::clone(&kadrs_repo)),
        (Role::User, Arc::clone(&users_repo)),
    ]);
    let auth_service = Arc::new(AuthService::new(directories, Arc::clone(&authenticator)));

    let state = AppState {
        auth_service,
        admins: Arc::new(StaffService::new(
            Role::Admin,
            Arc::clone(&admins_repo),
            Arc::clone(&notifier),
        )),
        directors: Arc::new(StaffService::new(
            Role::Director,
            Arc::clone(&directors_repo),
            Arc::clone(&notifier),
        )),
        kadrs: Arc::new(StaffService::new(
            Role::Kadr,
            Arc::clone(&kadrs_repo),
            Arc::clone(&notifier),
        )),
        users: Arc::new(StaffService::new(
            Role::User,
            Arc::clone(&users_repo),
            Arc::clone(&notifier),
        )),
        vacations: Arc::new(VacationService::new(
            vacations_repo,
            Arc::clone(&users_repo),
            Arc::clone(&notifier),
        )),
        authenticator,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
