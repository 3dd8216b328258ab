use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub query_timeout: Duration,
}

/// Page sizes applied to list requests.
#[derive(Debug, Clone, Deserialize)]
pub struct PagingConfig {
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db: DbConfig,
    pub paging: PagingConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let db = DbConfig {
            max_connections: env_or("DB_MAX_CONNECTIONS", 10),
            acquire_timeout: Duration::from_secs(env_or("DB_ACQUIRE_TIMEOUT_SECS", 5)),
            query_timeout: Duration::from_secs(env_or("DB_QUERY_TIMEOUT_SECS", 10)),
        };
        let defaults = PagingConfig::default();
        let paging = PagingConfig {
            default_page_size: env_or("DEFAULT_PAGE_SIZE", defaults.default_page_size),
            max_page_size: env_or("MAX_PAGE_SIZE", defaults.max_page_size),
        };
        anyhow::ensure!(
            paging.max_page_size > 0 && paging.default_page_size <= paging.max_page_size,
            "DEFAULT_PAGE_SIZE must not exceed MAX_PAGE_SIZE"
        );
        Ok(Self {
            database_url,
            db,
            paging,
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_on_missing_or_garbage() {
        assert_eq!(env_or::<u32>("RECIPESHARE_TEST_UNSET_KEY", 7), 7);

        std::env::set_var("RECIPESHARE_TEST_GARBAGE_KEY", "not-a-number");
        assert_eq!(env_or::<u64>("RECIPESHARE_TEST_GARBAGE_KEY", 3), 3);

        std::env::set_var("RECIPESHARE_TEST_NUMBER_KEY", "42");
        assert_eq!(env_or::<i64>("RECIPESHARE_TEST_NUMBER_KEY", 3), 42);
    }

    #[test]
    fn default_paging_is_consistent() {
        let paging = PagingConfig::default();
        assert!(paging.default_page_size <= paging.max_page_size);
    }
}
