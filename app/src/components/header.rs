//! Primary site navigation: logo, section tabs, search, theme toggle,
//! optional language switcher and the GitHub link.

use leptos::{html, prelude::*, wasm_bindgen::JsCast};
use leptos_router::hooks::use_location;

use crate::{
    components::{icons, search_bar},
    hooks::{
        auto_closable_dropdown::use_auto_closable_dropdown,
        feature_toggles::use_feature_toggles,
        locale_dropdown::use_locale_as_dropdown,
        media_query::{MOBILE_QUERY, use_media_query},
        theme::{Theme, use_theme},
    },
    i18n::{Locale, current_locale, delocalized_path, localized_path, message},
    site::{GITHUB_URL, HEADER_TABS, NavTab, NavTarget, is_partially_active},
    types::LANGUAGE_SELECTOR_TOGGLE,
};

/// Theme to switch to when the toggle is activated.
///
/// Keyboard activation also fires a click, so key presses are ignored.
#[must_use]
pub const fn next_theme(current: Theme, is_key_press: bool) -> Option<Theme> {
    if is_key_press {
        return None;
    }
    Some(current.toggled())
}

/// Sets `color-scheme` on the document root so scroll bars follow the theme.
fn set_color_scheme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Some(root) = root.dyn_ref::<web_sys::HtmlElement>() {
        _ = root.style().set_property("color-scheme", theme.as_str());
    }
}

fn nav_tab(tab: NavTab, locale: Memo<Locale>, page: Memo<String>, is_mobile: Signal<bool>) -> AnyView {
    let label = move || message(locale.get(), tab.label, is_mobile.get());
    match tab.target {
        NavTarget::Internal(to) => view! {
            <li class="nav__tabs">
                <a
                    href=move || localized_path(locale.get(), to)
                    class="activeStyleTab"
                    class:active=move || is_partially_active(&page.get(), to)
                >
                    {label}
                </a>
            </li>
        }
        .into_any(),
        NavTarget::External(url) => view! {
            <li class="nav__tabs">
                <a class="activeStyleTab" target="_blank" href=url rel="noopener noreferrer">
                    {label}
                </a>
            </li>
        }
        .into_any(),
    }
}

pub fn component() -> impl IntoView {
    let is_mobile = use_media_query(MOBILE_QUERY);
    let language_button_ref = NodeRef::<html::Button>::new();
    let locale_dropdown_items = use_locale_as_dropdown();
    let feature_toggles = use_feature_toggles();
    let dropdown = use_auto_closable_dropdown(locale_dropdown_items, language_button_ref);
    let (theme, toggle_theme) = use_theme();

    Effect::new(move |_| set_color_scheme(theme.get()));

    let handle_theme_on_click = move |is_key_press: bool| {
        if let Some(next) = next_theme(theme.get_untracked(), is_key_press) {
            toggle_theme.run(next);
        }
    };

    let location = use_location();
    let locale = Memo::new(move |_| current_locale(&location.pathname.get()));
    let page = Memo::new(move |_| delocalized_path(&location.pathname.get()));

    let tabs = HEADER_TABS
        .into_iter()
        .map(|tab| nav_tab(tab, locale, page, is_mobile))
        .collect_view();

    view! {
        <nav aria-label="Primary" class="nav">
            <div class="nav__container">
                <div class="nav__startwrapper">
                    <a href=move || localized_path(locale.get(), "/") aria-label="Homepage">
                        <div class="logo">
                            <img class="nav__logo light-mode-only" src="/logos/logo-light.svg" alt=""/>
                            <img class="nav__logo dark-mode-only" src="/logos/logo-dark.svg" alt=""/>
                        </div>
                    </a>
                </div>

                <ul class="nav__tabs__container">{tabs}</ul>

                <div class="nav__endwrapper">
                    <ul class="right-container">
                        <li class="nav__tabs search-bar">
                            <span class="sr-only">"Search Bar"</span>
                            {search_bar::component()}
                        </li>

                        <li class="nav__tabs">
                            <button
                                type="button"
                                class="dark-mode-toggle"
                                on:click=move |_| handle_theme_on_click(false)
                                on:keypress=move |_| handle_theme_on_click(true)
                            >
                                <span class="sr-only">"Toggle Dark Mode"</span>
                                {icons::night()}
                                {icons::brightness()}
                            </button>
                        </li>

                        <Suspense fallback=|| ()>
                            {move || Suspend::new(async move {
                                let toggles = feature_toggles.await;
                                toggles.has(LANGUAGE_SELECTOR_TOGGLE).then(|| view! {
                                    <li class="nav__tabs">
                                        <button
                                            type="button"
                                            class="language-switch"
                                            node_ref=language_button_ref
                                            on:click=move |_| dropdown.show_dropdown(!dropdown.visible())
                                        >
                                            <span class="sr-only">"Switch Language"</span>
                                            {icons::translate()}
                                        </button>
                                        {dropdown.render_dropdown()}
                                    </li>
                                })
                            })}
                        </Suspense>

                        <li class="nav__tabs">
                            <a target="_blank" href=GITHUB_URL rel="noopener noreferrer">
                                <span class="sr-only">"GitHub"</span>
                                {icons::github()}
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_flips_theme() {
        assert_eq!(next_theme(Theme::Light, false), Some(Theme::Dark));
        assert_eq!(next_theme(Theme::Dark, false), Some(Theme::Light));
    }

    #[test]
    fn key_press_is_ignored() {
        assert_eq!(next_theme(Theme::Light, true), None);
        assert_eq!(next_theme(Theme::Dark, true), None);
    }

    #[test]
    fn component_signature() {
        let _header_fn: fn() -> _ = component;
    }

    #[cfg(feature = "ssr")]
    mod rendered {
        use leptos_router::components::Router;

        use super::*;
        use crate::test_support::{class_tokens, render_at, tag_with};

        async fn header_at(path: &str, toggles: &str) -> String {
            render_at(path, toggles, || view! { <Router>{component}</Router> }).await
        }

        fn position(html: &str, needle: &str) -> usize {
            html.find(needle)
                .unwrap_or_else(|| panic!("{needle:?} missing from {html}"))
        }

        #[tokio::test]
        async fn tabs_render_in_order_with_localized_labels() {
            let html = header_at("/es/learn/modules", "").await;
            let learn = position(&html, "Aprender");
            let docs = position(&html, "Documentación");
            let download = position(&html, "Descargar");
            let community = position(&html, "Comunidad");
            assert!(learn < docs && docs < download && download < community);
            assert!(html.contains(r#"aria-label="Primary""#));
            assert!(html.contains(r#"aria-label="Homepage""#));
        }

        #[tokio::test]
        async fn subpage_marks_its_section_active() {
            let html = header_at("/es/learn/modules", "").await;
            let learn = tag_with(&html, r#"href="/es/learn""#).unwrap();
            assert!(class_tokens(learn).contains(&"active"), "{learn}");
            let download = tag_with(&html, r#"href="/es/download""#).unwrap();
            assert!(!class_tokens(download).contains(&"active"), "{download}");
        }

        #[tokio::test]
        async fn docs_tab_opens_externally() {
            let html = header_at("/", "").await;
            let docs = tag_with(&html, crate::site::DOCS_URL).unwrap();
            assert!(docs.contains(r#"target="_blank""#), "{docs}");
            assert!(html.contains("Documentation"));
        }

        #[tokio::test]
        async fn search_form_targets_the_current_locale() {
            let html = header_at("/fr/download", "").await;
            let form = tag_with(&html, "search-bar__form").unwrap();
            assert!(form.contains(r#"action="/fr/search""#), "{form}");
        }

        #[tokio::test]
        async fn language_switch_hidden_without_toggle() {
            let html = header_at("/es/learn/modules", "").await;
            assert!(!html.contains("language-switch"));
            assert!(!html.contains("dropdown-list"));
        }

        #[tokio::test]
        async fn language_switch_lists_locales_with_toggle() {
            let html = header_at("/es/learn/modules", LANGUAGE_SELECTOR_TOGGLE).await;
            assert!(html.contains("language-switch"));

            let current = tag_with(&html, r#"href="/es/learn/modules""#).unwrap();
            assert!(current.contains(r#"aria-current="true""#), "{current}");
            let other = tag_with(&html, r#"href="/fr/learn/modules""#).unwrap();
            assert!(!other.contains("aria-current"), "{other}");
            assert!(html.contains(r#"href="/learn/modules""#));
        }

        #[tokio::test]
        async fn github_link_renders_its_icon() {
            let html = header_at("/", "").await;
            let link = position(&html, crate::site::GITHUB_URL);
            let icon = tag_with(&html[link..], "github-icon").unwrap();
            assert!(icon.contains("padding: 1rem; width: 2rem; height: 2rem"), "{icon}");
            assert!(html[link..].contains("<path"));
        }
    }
}
