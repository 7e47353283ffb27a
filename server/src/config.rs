use app::types::{DEFAULT_SITE_URL, FeatureToggles, SiteConfig};
use std::env;

pub const FEATURE_TOGGLES_VAR: &str = "SITE_FEATURE_TOGGLES";
pub const SITE_URL_VAR: &str = "SITE_URL";

/// Builds the site configuration from already-read variable values.
pub fn site_config(feature_toggles: Option<&str>, site_url: Option<&str>) -> SiteConfig {
    let site_url = site_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_SITE_URL)
        .trim_end_matches('/')
        .to_owned();

    SiteConfig {
        feature_toggles: feature_toggles.map(FeatureToggles::parse).unwrap_or_default(),
        site_url,
    }
}

/// Reads `SITE_FEATURE_TOGGLES` and `SITE_URL`, applying defaults.
pub fn site_config_from_env() -> SiteConfig {
    let toggles = env::var(FEATURE_TOGGLES_VAR).ok();
    let site_url = env::var(SITE_URL_VAR).ok();
    site_config(toggles.as_deref(), site_url.as_deref())
}

/// Environment validation.
/// Ensures the variables needed in production are set.
pub fn validate_production_env() -> Result<(), Vec<String>> {
    let is_production = env::var("RUST_ENV")
        .unwrap_or_else(|_| "development".to_string())
        == "production";
    if !is_production {
        return Ok(());
    }

    let errors: Vec<String> = ["LEPTOS_SITE_ADDR", SITE_URL_VAR]
        .into_iter()
        .filter(|var| env::var(var).is_err())
        .map(|var| format!("Missing required environment variable: {var}"))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
