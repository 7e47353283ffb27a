use leptos::{logging, prelude::*};

use crate::{api::select_feature_toggles, types::FeatureToggles};

/// Feature toggles configured on the server.
///
/// Blocking so that toggled markup is part of the initial HTML. A failed
/// request is logged and treated as "nothing enabled".
pub fn use_feature_toggles() -> Resource<FeatureToggles> {
    Resource::new_blocking(
        || (),
        move |()| async move {
            select_feature_toggles().await.unwrap_or_else(|err| {
                logging::warn!("failed to load feature toggles: {err}");
                FeatureToggles::default()
            })
        },
    )
}
