//! Client configuration
//!
//! One configuration object for every view. The dashboard previously
//! mixed hard-coded URLs with environment-provided ones; everything now
//! goes through [`ClientConfig`].

/// Environment variable overriding the default base URL
pub const BASE_URL_ENV: &str = "TALLER_BASE_URL";

/// Client configuration for connecting to the work-order API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8085")
    pub base_url: String,

    /// Header carrying the bearer credential
    pub auth_header_name: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_header_name: "Authorization".to_string(),
            timeout: 30,
        }
    }

    /// Read the base URL from `TALLER_BASE_URL`, falling back to the
    /// local development server.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .unwrap_or_else(|_| "http://localhost:8085".to_string());
        Self::new(base_url)
    }

    /// Set the auth header name
    pub fn with_auth_header_name(mut self, name: impl Into<String>) -> Self {
        self.auth_header_name = name.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8085")
    }
}
