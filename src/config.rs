use crate::utils::get_env_or;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SHORT_URL_PREFIX: &str = "https://short.url";

pub struct Config {
    pub server_address: String,
    pub short_url_prefix: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            server_address: get_env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            short_url_prefix: get_env_or("SHORT_URL_PREFIX", DEFAULT_SHORT_URL_PREFIX),
        }
    }
}
