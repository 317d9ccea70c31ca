//! One-shot admin account seeding
//!
//! Creates the default admin user when it does not exist yet. Safe to run
//! repeatedly. The password comes from ADMIN_PASSWORD, with a development
//! default.

use anyhow::Context;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sqlx::postgres::PgPoolOptions;

use bounce_kingdom_server::{config::AppConfig, repository::Repository};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_EMAIL: &str = "admin@bouncekingdom.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let repository = Repository::new(pool);

    if repository
        .users
        .get_by_username(ADMIN_USERNAME)
        .await?
        .is_some()
    {
        println!("Admin user already exists, nothing to do");
        return Ok(());
    }

    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?
        .to_string();

    let user = repository
        .users
        .create(ADMIN_USERNAME, ADMIN_EMAIL, &password_hash, "admin")
        .await?;

    println!("Created admin user {} ({})", user.username, user.email);
    Ok(())
}
