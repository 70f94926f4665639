/// Base path of the backend API.
/// Configured at compile time:
/// - Default: /api (same origin, proxied in development)
/// - Override via the API_BASE_URL env var (forwarded by build.rs)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};
