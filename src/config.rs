/// The single upstream page this service republishes.
pub const CHANGELOG_URL: &str = "http://www.openbsd.org/faq/current.html";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self { bind_addr }
    }
}
