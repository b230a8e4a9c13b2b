use crate::utils::get_env::get_env_var;
use anyhow::Error;

/// Process configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub webhook_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let port = get_env_var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let webhook_url = get_env_var("DISCORD_WEBHOOK_URL")?;

        Ok(Self { port, webhook_url })
    }
}

#[cfg(test)]
mod cfg_tests {
    use crate::config::Config;

    #[test]
    pub fn test_config_from_env() {
        unsafe {
            std::env::set_var("DISCORD_WEBHOOK_URL", "https://example.com/api/webhooks/1/t");
            std::env::set_var("PORT", "8080");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.webhook_url, "https://example.com/api/webhooks/1/t");

        // a malformed port falls back to the default
        unsafe {
            std::env::set_var("PORT", "not-a-port");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3000);
    }
}
