// Core application modules and components
use crate::components::{error_template, header};
use crate::hooks::theme::provide_theme_context;
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, body, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{FlatRoutes, Route, Router},
    hooks::use_params_map,
};

pub mod api;
pub mod components;
mod community;
mod download;
pub mod hooks;
mod home;
pub mod i18n;
mod learn;
mod search;
pub mod site;
#[cfg(all(test, feature = "ssr"))]
mod test_support;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/docsite.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Docsite").build()),
        )),
        body().child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

fn not_found() -> impl IntoView {
    let mut outside_errors = Errors::default();
    outside_errors.insert_with_default_key(error_template::AppError::NotFound);
    error_template::component(Some(outside_errors), None)
}

/// Renders `page` under a `/:lang` prefix; anything that is not a known
/// non-default locale code is a missing page.
fn localized<F, V>(page: F) -> impl IntoView
where
    F: Fn() -> V + Copy + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let params = use_params_map();
    move || {
        let lang = params.with(|params| params.get("lang"));
        match lang.as_deref().and_then(i18n::Locale::from_prefix) {
            Some(_) => page().into_any(),
            None => not_found().into_any(),
        }
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    provide_theme_context();

    view! {
        <Router>
            {header::component}
            <main class="main">
                <FlatRoutes fallback=not_found>
                    <Route path=StaticSegment("") view=home::component/>
                    <Route path=StaticSegment("learn") view=learn::component/>
                    <Route path=StaticSegment("download") view=download::component/>
                    <Route path=StaticSegment("community") view=community::component/>
                    <Route path=StaticSegment("search") view=search::component/>
                    <Route path=(ParamSegment("lang"), StaticSegment("learn")) view=|| localized(learn::component)/>
                    <Route path=(ParamSegment("lang"), StaticSegment("download")) view=|| localized(download::component)/>
                    <Route path=(ParamSegment("lang"), StaticSegment("community")) view=|| localized(community::component)/>
                    <Route path=(ParamSegment("lang"), StaticSegment("search")) view=|| localized(search::component)/>
                    <Route path=ParamSegment("lang") view=|| localized(home::component)/>
                </FlatRoutes>
            </main>
            {footer_component()}
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer().class("footer").child(
        p().class("footer__copyright").child((
            format!("\u{a9} {} ", Utc::now().year()),
            a().href(site::GITHUB_URL)
                .target("_blank")
                .rel("noopener noreferrer")
                .child("docsite contributors"),
        )),
    )
}
