use std::{env, time::Duration};

// Runtime/server settings (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("ASTRO_BLASTER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001)
}

// Absent or blank means game-over lines come from the canned source.
pub fn flavor_api_key() -> Option<String> {
    env::var("GEMINI_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

pub fn flavor_base_url() -> String {
    env::var("FLAVOR_BASE_URL")
        .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string())
}

pub fn flavor_model() -> String {
    env::var("FLAVOR_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string())
}

pub fn flavor_timeout() -> Duration {
    let millis = env::var("FLAVOR_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / 60);
