//! Server-side rendering helpers shared by the component tests.

use std::sync::Arc;

use futures::StreamExt as _;
use any_spawner::Executor;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::location::RequestUrl;

use crate::{
    hooks::theme::provide_theme_context,
    types::{AppState, FeatureToggles, SiteConfig},
};

/// Renders `view` to HTML as if `path` had been requested, with the
/// comma separated `toggles` enabled on the server.
pub async fn render_at<F, V>(path: &str, toggles: &str, view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView + 'static,
{
    // errors once another test has set the global executor
    _ = Executor::init_tokio();

    let owner = Owner::new();
    let stream = owner.with(|| {
        provide_meta_context();
        provide_context(RequestUrl::new(path));
        provide_context(AppState {
            site: Arc::new(SiteConfig {
                feature_toggles: FeatureToggles::parse(toggles),
                ..SiteConfig::default()
            }),
            leptos_options: Arc::new(LeptosOptions::builder().output_name("docsite").build()),
        });
        provide_theme_context();
        view().to_html_stream_in_order()
    });
    let html = stream.collect::<String>().await;
    drop(owner);
    html
}

/// The opening tag containing `needle`, e.g. `<a href="/x" class="y">`.
pub fn tag_with<'a>(html: &'a str, needle: &str) -> Option<&'a str> {
    let at = html.find(needle)?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(&html[start..=end])
}

/// Whitespace separated tokens of the `class` attribute of `tag`.
pub fn class_tokens(tag: &str) -> Vec<&str> {
    tag.split_once("class=\"")
        .and_then(|(_, rest)| rest.split_once('"'))
        .map(|(classes, _)| classes.split_whitespace().collect())
        .unwrap_or_default()
}
