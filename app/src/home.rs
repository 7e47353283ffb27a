//! Landing page: short introduction and entry points into the main sections.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use crate::{
    i18n::{current_locale, localized_path},
    site::SITE_PAGES,
};

pub fn component() -> impl IntoView {
    let location = use_location();
    let locale = Memo::new(move |_| current_locale(&location.pathname.get()));

    let sections = SITE_PAGES
        .iter()
        .filter(|page| page.path != "/")
        .map(|page| {
            let path = page.path;
            view! {
                <li class="home__section">
                    <a href=move || localized_path(locale.get(), path)>{page.title}</a>
                    <p>{page.summary}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text="Docsite"/>
        <section class="home">
            <h1 class="home__title">"Run JavaScript Everywhere"</h1>
            <p class="home__lead">{SITE_PAGES[0].summary}</p>
            <ul class="home__sections">{sections}</ul>
        </section>
    }
}
