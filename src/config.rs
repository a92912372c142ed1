use crate::error::AppError;
use crate::stats::tft::VariantOptions;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_CHAMPION_TABLE: &str = "data/champion_ids.json";
pub const DEFAULT_QUEUE_TABLE: &str = "data/queues.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub tft_api_key: String,
    pub region: String,
    pub bind_addr: String,
    pub champion_table: PathBuf,
    pub queue_table: PathBuf,
    pub variant: VariantOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "RIOT_API_KEY not found in .env file".to_string(),
            )
        })?;

        // TFT endpoints historically used their own key
        let tft_api_key = env::var("TFT_API_KEY").unwrap_or_else(|_| api_key.clone());

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| "na1".to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());

        let champion_table = env::var("CHAMPION_TABLE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CHAMPION_TABLE));
        let queue_table = env::var("QUEUE_TABLE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_QUEUE_TABLE));

        let defaults = VariantOptions::default();
        let variant = VariantOptions {
            trait_prefix_len: prefix_len("TFT_TRAIT_PREFIX_LEN", defaults.trait_prefix_len)?,
            unit_prefix_len: prefix_len("TFT_UNIT_PREFIX_LEN", defaults.unit_prefix_len)?,
        };

        Ok(Config {
            api_key,
            tft_api_key,
            region,
            bind_addr,
            champion_table,
            queue_table,
            variant,
        })
    }
}

fn prefix_len(var: &str, default: usize) -> Result<usize, AppError> {
    match env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("{} must be a non-negative integer, got {:?}", var, raw))
        }),
        Err(_) => Ok(default),
    }
}
