//! Search results page.
//!
//! Matches the query against the static page list; there is no index.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_location, use_query_map};

use crate::{
    components::search_bar::QUERY_PARAM,
    i18n::{current_locale, localized_path},
    site::matching_pages,
};

pub fn component() -> impl IntoView {
    let query = use_query_map();
    let location = use_location();
    let locale = Memo::new(move |_| current_locale(&location.pathname.get()));
    let term = Memo::new(move |_| query.with(|params| params.get(QUERY_PARAM).unwrap_or_default()));

    let results = move || {
        let pages = matching_pages(&term.get());
        if pages.is_empty() {
            return view! { <p class="search__empty">"No results"</p> }.into_any();
        }
        view! {
            <ul class="search__results">
                {pages
                    .into_iter()
                    .map(|page| view! {
                        <li>
                            <a href=localized_path(locale.get(), page.path)>{page.title}</a>
                            <p>{page.summary}</p>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <Title text="Search"/>
        <section class="search">
            <h1>{move || format!("Results for \u{201c}{}\u{201d}", term.get())}</h1>
            {results}
        </section>
    }
}
