//! Light/dark theme state shared through context.
//!
//! The theme only lives in memory for the lifetime of the page. On the
//! client the current value is mirrored onto the document root as a `light`
//! or `dark` class, which the `light-mode-only` / `dark-mode-only` rules in
//! the stylesheet key off.

use core::fmt;
use core::str::FromStr;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`, expected `light` or `dark`")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

/// Creates the theme signal, mirrors it onto the document root and makes it
/// available to [`use_theme`].
pub fn provide_theme_context() -> ThemeContext {
    let context = ThemeContext {
        theme: RwSignal::new(Theme::default()),
    };

    Effect::new(move |_| apply_theme_class(context.theme.get()));

    provide_context(context);
    context
}

fn apply_theme_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    _ = classes.toggle_with_force(Theme::Dark.as_str(), theme == Theme::Dark);
    _ = classes.toggle_with_force(Theme::Light.as_str(), theme == Theme::Light);
}

/// Current theme and a callback replacing it.
///
/// # Panics
///
/// Panics when called outside a tree where [`provide_theme_context`] ran.
pub fn use_theme() -> (Signal<Theme>, Callback<Theme>) {
    let ThemeContext { theme } = expect_context::<ThemeContext>();
    let current = Signal::derive(move || theme.get());
    let set_theme = Callback::new(move |next: Theme| theme.set(next));
    (current, set_theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn toggled_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn parses_and_displays_literals() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(Theme::Light.to_string(), "light");
        assert_matches!("Dark".parse::<Theme>(), Err(ThemeParseError(s)) if s == "Dark");
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn use_theme_reads_and_writes_context() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(ThemeContext {
                theme: RwSignal::new(Theme::Light),
            });
            let (theme, set_theme) = use_theme();
            assert_eq!(theme.get_untracked(), Theme::Light);
            set_theme.run(Theme::Dark);
            assert_eq!(theme.get_untracked(), Theme::Dark);
        });
    }
}
