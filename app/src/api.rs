//! Server functions called from the hydrated client.

#![allow(deprecated)]

use leptos::prelude::{ServerFnError, server};
use leptos::server_fn::codec::GetUrl;

use crate::types::FeatureToggles;

/// Returns the feature toggles enabled in the server's site configuration.
#[server(endpoint = "/feature-toggles", input = GetUrl)]
pub async fn select_feature_toggles() -> Result<FeatureToggles, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::use_context;

    let Some(AppState { site, .. }) = use_context::<AppState>() else {
        tracing::error!("AppState missing from server function context");
        return Err(ServerFnError::ServerError(
            "site configuration unavailable".to_owned(),
        ));
    };
    tracing::debug!(
        toggles = ?site.feature_toggles,
        "serving feature toggles"
    );
    Ok(site.feature_toggles.clone())
}
