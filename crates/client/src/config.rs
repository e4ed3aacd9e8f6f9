use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Connection settings for the notices API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    api: ApiConfig,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
        .normalized()
    }

    /// Parse the `[api]` table of a config file. A missing table yields defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.api.normalized())
    }

    /// Apply `API_URL` / `API_TIMEOUT_SECS` style overrides. Unparseable
    /// timeouts are ignored.
    pub fn with_overrides(mut self, base_url: Option<String>, timeout_secs: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = timeout_secs {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => tracing::warn!(value = %raw, "ignoring invalid API_TIMEOUT_SECS"),
            }
        }
        self.normalized()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL for an API path such as `/api/notices`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        if self.timeout_secs == 0 {
            self.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        self
    }
}

/// Load the API config once per process and return it.
pub fn load() -> &'static ApiConfig {
    CONFIG.get_or_init(read_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> ApiConfig {
    let _ = dotenvy::dotenv();

    let from_file = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => ApiConfig::from_toml_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to parse {CONFIG_PATH}, using defaults");
            ApiConfig::default()
        }),
        Err(e) => {
            tracing::debug!(error = %e, "{CONFIG_PATH} not found, using defaults");
            ApiConfig::default()
        }
    };

    let config = from_file.with_overrides(
        std::env::var("API_URL").ok(),
        std::env::var("API_TIMEOUT_SECS").ok(),
    );
    tracing::info!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "api config loaded");
    config
}

/// The browser has no config file or process environment; values are baked
/// in at build time.
#[cfg(target_arch = "wasm32")]
fn read_config() -> ApiConfig {
    ApiConfig::default().with_overrides(
        option_env!("API_URL").map(str::to_string),
        option_env!("API_TIMEOUT_SECS").map(str::to_string),
    )
}
