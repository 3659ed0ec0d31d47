use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// | Env Var                | Required | Default                 |
/// |------------------------|----------|-------------------------|
/// | `HOST`                 | no       | `0.0.0.0`               |
/// | `PORT`                 | no       | `3000`                  |
/// | `DATABASE_URL`         | **yes**  | --                      |
/// | `DB_MAX_CONNECTIONS`   | no       | `20`                    |
/// | `CORS_ORIGINS`         | no       | `http://localhost:5173` |
/// | `REQUEST_TIMEOUT_SECS` | no       | `30`                    |
///
/// JWT settings are documented on [`JwtConfig`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Allowed CORS origins, comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `DATABASE_URL` is missing or any numeric variable fails to
    /// parse. Misconfiguration should fail at startup, not at first use.
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", 3000),
            database_url: std::env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set in the environment"),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 20),
            cors_origins,
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{key} has an unparseable value '{raw}'")),
        Err(_) => default,
    }
}
