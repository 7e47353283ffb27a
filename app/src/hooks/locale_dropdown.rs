use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::{
    components::dropdown::DropdownItem,
    i18n::{LOCALES, current_locale, delocalized_path, localized_path},
};

/// Builds one dropdown entry per locale for `pathname`.
#[must_use]
pub fn locale_items(pathname: &str) -> Vec<DropdownItem> {
    let current = current_locale(pathname);
    let page = delocalized_path(pathname);
    LOCALES
        .iter()
        .map(|locale| DropdownItem {
            title: locale.local_name.to_owned(),
            label: locale.name.to_owned(),
            href: localized_path(*locale, &page),
            active: locale.code == current.code,
        })
        .collect()
}

/// Locale switcher entries for the page currently displayed.
pub fn use_locale_as_dropdown() -> Signal<Vec<DropdownItem>> {
    let location = use_location();
    Signal::derive(move || locale_items(&location.pathname.get()))
}
