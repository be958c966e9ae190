use dotenv::dotenv;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ProviderConfig {
    /// Reads `OPENAI_API_KEY` and `OPENAI_BASE_URL`, loading `.env` first.
    ///
    /// The key is not checked here; a missing one comes back from the API as
    /// an authentication error.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self {
            api_key: get_env_var("OPENAI_API_KEY").unwrap_or_default(),
            base_url: get_env_var("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn get_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
