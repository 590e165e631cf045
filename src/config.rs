use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub chat_response_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            chat_response_delay_ms: env::var("CHAT_RESPONSE_DELAY_MS")
                .unwrap_or_else(|_| "1500".to_string())
                .parse()
                .unwrap_or(1500),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_unset() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.chat_response_delay_ms, 1500);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn server_addr_joins_host_and_port() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 9999,
            chat_response_delay_ms: 0,
        };
        assert_eq!(config.server_addr(), "127.0.0.1:9999");
    }
}
