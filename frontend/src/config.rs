use shared::token::REFRESH_CHECK_INTERVAL_MS;

pub struct Config;

impl Config {
    /// Base URL prefixed to every `/api/...` path.
    ///
    /// Set `ARENA_API_URL` at build time to talk to a backend on another
    /// origin. Left unset, requests stay relative so Trunk's dev proxy or the
    /// production reverse proxy can route `/api/` to the backend.
    pub fn api_base_url() -> String {
        option_env!("ARENA_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default()
    }

    /// Google Analytics measurement id, if analytics are configured for this build.
    pub fn ga_measurement_id() -> Option<&'static str> {
        option_env!("ARENA_GA_MEASUREMENT_ID").filter(|id| !id.trim().is_empty())
    }

    pub fn refresh_check_interval_ms() -> u32 {
        REFRESH_CHECK_INTERVAL_MS
    }

    /// How long a tournament listing stays in the request cache.
    pub fn listing_cache_ttl_ms() -> f64 {
        5.0 * 60.0 * 1000.0
    }

    pub fn listing_cache_capacity() -> usize {
        16
    }

    pub fn hero_slide_interval_ms() -> u32 {
        5_000
    }
}
