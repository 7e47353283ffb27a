use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

/// Feature toggle enabling the header's language switcher.
pub const LANGUAGE_SELECTOR_TOGGLE: &str = "i18n-language-selector";

/// Set of enabled feature toggle names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureToggles(BTreeSet<String>);

impl FeatureToggles {
    /// Parses a comma or whitespace separated list of toggle names.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

impl FromIterator<String> for FeatureToggles {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Site settings read by the server at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub feature_toggles: FeatureToggles,
    /// Absolute origin used for sitemap links, without a trailing slash.
    pub site_url: String,
}

pub const DEFAULT_SITE_URL: &str = "http://127.0.0.1:3007";

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            feature_toggles: FeatureToggles::default(),
            site_url: DEFAULT_SITE_URL.to_owned(),
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub site: std::sync::Arc<SiteConfig>,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}
