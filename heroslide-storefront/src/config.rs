/// Default backend base URL.
/// Override at build time: HEROSLIDE_BACKEND_URL=https://example.com cargo build
pub const DEFAULT_BACKEND_URL: &str = match option_env!("HEROSLIDE_BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:9000",
};

/// Backend base URL, taken from the runtime environment when set.
pub fn backend_url() -> String {
    std::env::var("HEROSLIDE_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}
