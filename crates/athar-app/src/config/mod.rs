use anyhow::{bail, Result};

use athar_api::{normalize_base_url, Environment};

/// Resolved settings for talking to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: Environment,
    pub base_url: String,
    pub verbose: bool,
    pub health_check: bool,
}

impl ClientConfig {
    /// Resolve the backend location.
    ///
    /// Precedence: explicit URL > environment's default URL > build default.
    /// `clap` has already folded `ATHAR_API_URL` / `ATHAR_ENV` (and `.env`)
    /// into the arguments, so this only sees the winning values.
    pub fn resolve(api_url: Option<&str>, environment: Option<&str>) -> Result<Self> {
        let environment = match environment.map(str::trim).filter(|s| !s.is_empty()) {
            Some(name) => match Environment::from_str(name) {
                Some(env) => env,
                None => bail!("unknown environment '{}' (expected production or local)", name),
            },
            None => Environment::for_build(),
        };

        let base_url = match api_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    bail!("API URL must start with http:// or https://, got '{}'", url);
                }
                normalize_base_url(url)
            }
            None => environment.default_base_url().to_string(),
        };

        Ok(Self {
            environment,
            base_url,
            verbose: false,
            health_check: true,
        })
    }
}
