use app::{
    hooks::locale_dropdown::locale_items,
    i18n::{LOCALES, MessageKey, current_locale, delocalized_path, localized_path, message},
    site::{HEADER_TABS, NavTarget, SITE_PAGES, is_partially_active},
    types::{FeatureToggles, LANGUAGE_SELECTOR_TOGGLE},
};

/// Header behaviour that does not need a browser: which tab is highlighted,
/// what each link points at, and when the language switcher shows up.
#[cfg(test)]
mod navigation_tests {
    use super::*;

    fn active_tabs(pathname: &str) -> Vec<&'static str> {
        let page = delocalized_path(pathname);
        HEADER_TABS
            .iter()
            .filter_map(|tab| match tab.target {
                NavTarget::Internal(to) if is_partially_active(&page, to) => Some(to),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn localized_subpage_highlights_its_tab() {
        assert_eq!(active_tabs("/ja/learn/modules"), ["/learn"]);
        assert_eq!(active_tabs("/download"), ["/download"]);
    }

    #[test]
    fn home_and_search_highlight_nothing() {
        assert!(active_tabs("/").is_empty());
        assert!(active_tabs("/es/").is_empty());
        assert!(active_tabs("/search").is_empty());
    }

    #[test]
    fn internal_tabs_follow_the_current_locale() {
        let locale = current_locale("/fr/community");
        let hrefs: Vec<_> = HEADER_TABS
            .iter()
            .filter_map(|tab| match tab.target {
                NavTarget::Internal(to) => Some(localized_path(locale, to)),
                NavTarget::External(_) => None,
            })
            .collect();
        assert_eq!(hrefs, ["/fr/learn", "/fr/download", "/fr/community"]);
    }

    #[test]
    fn labels_are_localized() {
        let locale = current_locale("/es/learn");
        assert_eq!(message(locale, MessageKey::HeaderLearn, false), "Aprender");
        assert_eq!(message(locale, MessageKey::HeaderDocs, true), "Docs");
    }

    #[test]
    fn locale_switcher_round_trips_every_page() {
        for page in SITE_PAGES {
            for item in locale_items(page.path) {
                assert_eq!(delocalized_path(&item.href), page.path, "{}", item.href);
            }
        }
        assert_eq!(locale_items("/").len(), LOCALES.len());
    }

    #[test]
    fn language_switcher_requires_its_toggle() {
        assert!(!FeatureToggles::default().has(LANGUAGE_SELECTOR_TOGGLE));
        assert!(FeatureToggles::parse("i18n-language-selector").has(LANGUAGE_SELECTOR_TOGGLE));
    }
}
