use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Google-style Geocoding API called directly
    Google,
    /// Hosted function that returns the normalized place shape
    EdgeFunction,
}

impl ProviderKind {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "edge-function" | "edge_function" | "edge" => Ok(Self::EdgeFunction),
            other => anyhow::bail!("unknown geocoding provider: {}", other),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Provider settings
    pub provider: ProviderKind,
    pub provider_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,

    // Cache settings
    pub cache_ttl_secs: u64,
    pub cache_gc_interval_secs: u64,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Google,
            provider_url: "https://maps.googleapis.com/maps/api/geocode/json".to_string(),
            api_key: None,
            timeout_secs: 10,
            cache_ttl_secs: 1800,
            cache_gc_interval_secs: 0,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let provider = match std::env::var("GEOCODER_PROVIDER") {
        Ok(v) => ProviderKind::parse(&v)?,
        Err(_) => ProviderKind::Google,
    };

    let provider_url = match (std::env::var("GEOCODER_PROVIDER_URL"), provider) {
        (Ok(url), _) => url,
        (Err(_), ProviderKind::Google) => {
            "https://maps.googleapis.com/maps/api/geocode/json".to_string()
        }
        (Err(_), ProviderKind::EdgeFunction) => {
            anyhow::bail!("GEOCODER_PROVIDER_URL is required for the edge-function provider")
        }
    };

    let api_key = std::env::var("GEOCODER_API_KEY")
        .ok()
        .filter(|k| !k.is_empty());

    let timeout_secs = std::env::var("GEOCODER_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .unwrap_or(10);

    let cache_ttl_secs = std::env::var("GEOCODER_CACHE_TTL_SECS")
        .unwrap_or_else(|_| "1800".to_string())
        .parse()
        .unwrap_or(1800);

    let cache_gc_interval_secs = std::env::var("GEOCODER_CACHE_GC_INTERVAL_SECS")
        .unwrap_or_else(|_| "0".to_string())
        .parse()
        .unwrap_or(0);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        provider,
        provider_url,
        api_key,
        timeout_secs,
        cache_ttl_secs,
        cache_gc_interval_secs,
        debug,
    })
}
