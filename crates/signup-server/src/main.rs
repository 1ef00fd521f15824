use anyhow::Context;
use signup_form::{AppConfig, RegistrationValidator, Schema};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let validator = RegistrationValidator::new(Schema::registration(&config.validation));
    let app = signup_server::app(validator);

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        %addr,
        phone_policy = config.validation.phone_policy.as_str(),
        password_min_length = config.validation.password_min_length,
        "signup form listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
