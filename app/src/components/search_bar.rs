use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::i18n::{current_locale, localized_path};

/// Query parameter carrying the search text.
pub const QUERY_PARAM: &str = "q";

/// Search page for the locale `pathname` is rendered in.
#[must_use]
pub fn search_action(pathname: &str) -> String {
    localized_path(current_locale(pathname), "/search")
}

/// Search box submitting to the search page of the current locale.
pub fn component() -> impl IntoView {
    let location = use_location();
    let action = move || search_action(&location.pathname.get());

    view! {
        <form class="search-bar__form" role="search" action=action method="get">
            <input
                class="search-bar__input"
                type="search"
                name=QUERY_PARAM
                placeholder="Search"
                aria-label="Search"
                autocomplete="off"
            />
        </form>
    }
}
