use std::any::Any;
use std::env::vars;

use anyhow::bail;
use roster_states::{SnapshotClone, State, state_assign_impl};
use serde::Deserialize;
use ustr::Ustr;

use crate::pagination::ITEMS_PER_PAGE;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Page size used for every users query.
    pub items_per_page: usize,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub auth_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    items_per_page: Option<usize>,
    auth_token: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            ..Self::default()
        }
    }

    /// Reads `API_BASE_URL`, `ITEMS_PER_PAGE` and `AUTH_TOKEN`, loading a
    /// `.env` file first when one exists.
    pub fn init() -> anyhow::Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::info!("Loaded environment from {}", path.display());
        }
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            api_base_url,
            items_per_page,
            auth_token,
        } = raw;

        let items_per_page = items_per_page.unwrap_or(ITEMS_PER_PAGE);
        if items_per_page == 0 {
            bail!("ITEMS_PER_PAGE must be at least 1");
        }

        let api_base_url = match api_base_url {
            Some(url) => {
                log::info!("Using provided API_BASE_URL: {url}");
                url.trim_end_matches('/').to_owned()
            }
            None => DEFAULT_API_BASE_URL.to_owned(),
        };

        Ok(Self {
            api_base_url,
            items_per_page,
            auth_token: auth_token.filter(|token| !token.is_empty()),
        })
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            items_per_page: ITEMS_PER_PAGE,
            auth_token: None,
        }
    }
}

impl SnapshotClone for BusinessConfig {
    fn clone_boxed(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn defaults_apply_when_unset() {
        let raw: RawConfig = from_iter(Vec::<(&str, &str)>::new()).expect("empty env");
        let config = BusinessConfig::from_raw(raw).expect("defaults are valid");

        assert_eq!(config, BusinessConfig::default());
        assert_eq!(config.api_url(), Ustr::from("http://localhost:8080/api"));
    }

    #[test]
    fn env_values_override_defaults() {
        let raw: RawConfig = from_iter(vec![
            ("API_BASE_URL", "https://admin.example.com/"),
            ("ITEMS_PER_PAGE", "50"),
            ("AUTH_TOKEN", "secret"),
        ])
        .expect("RawConfig should deserialize");
        let config = BusinessConfig::from_raw(raw).expect("config should build");

        assert_eq!(config.api_base_url, "https://admin.example.com");
        assert_eq!(config.items_per_page, 50);
        assert_eq!(config.auth_token(), Some("secret"));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let raw: RawConfig =
            from_iter(vec![("ITEMS_PER_PAGE", "0")]).expect("RawConfig should deserialize");
        let err = BusinessConfig::from_raw(raw).expect_err("zero page size");

        assert!(err.to_string().contains("ITEMS_PER_PAGE"));
    }

    #[test]
    fn empty_base_url_uses_relative_api() {
        let config = BusinessConfig::new(String::new());
        assert_eq!(config.api_url(), Ustr::from("/api"));
    }
}
