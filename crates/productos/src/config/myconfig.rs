use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_min_conn = optional_u32("DB_MIN_CONN", 1)?;
        let db_max_conn = optional_u32("DB_MAX_CONN", 5)?;

        if db_min_conn > db_max_conn {
            anyhow::bail!(
                "DB_MIN_CONN ({db_min_conn}) must not exceed DB_MAX_CONN ({db_max_conn})"
            );
        }

        Ok(Self {
            database_url,
            port,
            db_min_conn,
            db_max_conn,
        })
    }
}

fn optional_u32(key: &str, default: u32) -> Result<u32> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("{key} must be a valid u32 integer")),
        Err(_) => Ok(default),
    }
}
