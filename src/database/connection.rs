use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

const CONNECT_ATTEMPTS: u32 = 5;
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Connects to Postgres, retrying a few times so the server survives the
/// database container coming up after it.
pub async fn get_db_pool() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env file");

    let mut attempt = 1;
    loop {
        match PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(&database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!("connected to Postgres");
                return pool;
            }
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!("connection attempt {attempt} failed: {e}");
                attempt += 1;
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => panic!("could not connect to Postgres after {CONNECT_ATTEMPTS} attempts: {e}"),
        }
    }
}
