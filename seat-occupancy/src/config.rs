use envconfig::Envconfig;
use once_cell::sync::Lazy;
use std::net::SocketAddr;
use std::ops::Deref;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlexBool(pub bool);

impl FromStr for FlexBool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(FlexBool(true)),
            "false" | "0" | "no" | "off" | "" => Ok(FlexBool(false)),
            _ => Err(format!("Invalid boolean value: {}", s)),
        }
    }
}

impl From<FlexBool> for bool {
    fn from(flex: FlexBool) -> Self {
        flex.0
    }
}

impl Deref for FlexBool {
    type Target = bool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(from = "ADDRESS", default = "127.0.0.1:3010")]
    pub address: SocketAddr,

    #[envconfig(from = "DEBUG", default = "false")]
    pub debug: FlexBool,

    #[envconfig(from = "ENABLE_METRICS", default = "false")]
    pub enable_metrics: FlexBool,

    #[envconfig(from = "MAX_CONCURRENCY", default = "1000")]
    pub max_concurrency: usize,

    // 0 disables the cache
    #[envconfig(from = "CACHE_MAX_ENTRIES", default = "10000")]
    pub cache_max_entries: u64,

    // Counts above occupancy::MAX_TOTAL_SEATS are rejected by the engine regardless
    #[envconfig(from = "MAX_TOTAL_SEATS", default = "1000")]
    pub max_total_seats: usize,
}

impl Config {
    pub fn default_test_config() -> Self {
        Self {
            address: SocketAddr::from(([127, 0, 0, 1], 0)),
            debug: FlexBool(false),
            enable_metrics: FlexBool(false),
            max_concurrency: 1000,
            cache_max_entries: 1000,
            max_total_seats: 1000,
        }
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_max_entries > 0
    }
}

pub static DEFAULT_TEST_CONFIG: Lazy<Config> = Lazy::new(Config::default_test_config);
