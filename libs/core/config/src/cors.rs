use crate::{ConfigError, FromEnv};

/// Allowed CORS origins.
///
/// Read from the comma-separated `CORS_ALLOWED_ORIGIN` variable. An unset or
/// blank variable yields an empty list, which means no CORS layer is installed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_enabled(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    fn parse(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let allowed_origins = std::env::var("CORS_ALLOWED_ORIGIN")
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default();

        Ok(Self { allowed_origins })
    }
}
