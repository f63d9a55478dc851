use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub model_dir: String,
    #[allow(dead_code)]
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            model_dir: env::var("MODEL_DIR").unwrap_or_else(|_| "/opt/ml/model".to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
