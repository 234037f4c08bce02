use std::env;

#[derive(Clone)]
pub struct Config {
    /// Port the HTTP server binds to
    pub port: u16,
    /// Directory holding the static client page
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }
}
