use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub ai_service: AiServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AiServiceConfig {
    pub base_url: String,
    /// Upper bound on a single AI-service call, connect through body.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Reads configuration from the environment once at startup. Every key
    /// has a default, so startup never fails on a missing variable.
    pub fn from_env() -> Self {
        let get_str = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };
        let get_u16 = |key: &str, default: u16| -> u16 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };
        let get_u64 = |key: &str, default: u64| -> u64 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        AppConfig {
            server: ServerConfig {
                host: get_str("SERVER_HOST", "0.0.0.0"),
                port: get_u16("PORT", 5000),
            },
            ai_service: AiServiceConfig {
                base_url: get_str("AI_SERVICE_URL", "http://ai-service:8000"),
                request_timeout: Duration::from_secs(get_u64("AI_SERVICE_TIMEOUT_SECS", 10)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide, so all cases run in one test.
    #[test]
    fn from_env_defaults_and_overrides() {
        std::env::remove_var("SERVER_HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("AI_SERVICE_URL");
        std::env::remove_var("AI_SERVICE_TIMEOUT_SECS");

        let config = AppConfig::from_env();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.ai_service.base_url, "http://ai-service:8000");
        assert_eq!(config.ai_service.request_timeout, Duration::from_secs(10));

        std::env::set_var("PORT", "not-a-port");
        assert_eq!(AppConfig::from_env().server.port, 5000);

        std::env::set_var("PORT", "8080");
        std::env::set_var("AI_SERVICE_URL", "http://localhost:8000");
        let config = AppConfig::from_env();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai_service.base_url, "http://localhost:8000");

        std::env::remove_var("PORT");
        std::env::remove_var("AI_SERVICE_URL");
    }
}
