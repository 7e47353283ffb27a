//! Locale table, path localization and the static message catalog used by
//! the header.
//!
//! The default locale is served without a path prefix; every other locale
//! lives under `/{code}/...`.

/// A locale the site can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    /// English name, shown as the dropdown label.
    pub name: &'static str,
    /// Name in the locale's own language, shown as the dropdown title.
    pub local_name: &'static str,
}

pub const DEFAULT_LOCALE: Locale = Locale {
    code: "en",
    name: "English",
    local_name: "English",
};

pub const LOCALES: [Locale; 4] = [
    DEFAULT_LOCALE,
    Locale {
        code: "es",
        name: "Spanish",
        local_name: "Español",
    },
    Locale {
        code: "fr",
        name: "French",
        local_name: "Français",
    },
    Locale {
        code: "ja",
        name: "Japanese",
        local_name: "日本語",
    },
];

impl Locale {
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.code == DEFAULT_LOCALE.code
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        LOCALES.iter().copied().find(|locale| locale.code == code)
    }

    /// Locale for a `/{code}/...` path prefix. The default locale is never
    /// a valid prefix.
    #[must_use]
    pub fn from_prefix(code: &str) -> Option<Self> {
        Self::from_code(code).filter(|locale| !locale.is_default())
    }
}

fn prefixed_locale(path: &str) -> Option<Locale> {
    let first = path.trim_start_matches('/').split('/').next()?;
    Locale::from_prefix(first)
}

/// Locale selected by the first path segment, falling back to the default.
#[must_use]
pub fn current_locale(path: &str) -> Locale {
    prefixed_locale(path).unwrap_or(DEFAULT_LOCALE)
}

/// Strips a non-default locale prefix, always returning an absolute path.
#[must_use]
pub fn delocalized_path(path: &str) -> String {
    let Some(locale) = prefixed_locale(path) else {
        return if path.starts_with('/') {
            path.to_owned()
        } else {
            format!("/{path}")
        };
    };
    let rest = path
        .trim_start_matches('/')
        .strip_prefix(locale.code)
        .unwrap_or_default();
    if rest.is_empty() {
        "/".to_owned()
    } else {
        rest.to_owned()
    }
}

/// Prefixes `path` for `locale`. `path` is expected to be de-localized.
#[must_use]
pub fn localized_path(locale: Locale, path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    };
    if locale.is_default() {
        path
    } else {
        format!("/{}{path}", locale.code)
    }
}

/// Message ids rendered by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    HeaderLearn,
    HeaderDocs,
    HeaderDownload,
    HeaderCommunity,
}

impl MessageKey {
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::HeaderLearn => "components.header.links.learn",
            Self::HeaderDocs => "components.header.links.docs",
            Self::HeaderDownload => "components.header.links.download",
            Self::HeaderCommunity => "components.header.links.community",
        }
    }
}

struct Catalog {
    learn: &'static str,
    docs_short: &'static str,
    docs_long: &'static str,
    download: &'static str,
    community: &'static str,
}

const EN: Catalog = Catalog {
    learn: "Learn",
    docs_short: "Docs",
    docs_long: "Documentation",
    download: "Download",
    community: "Community",
};

const ES: Catalog = Catalog {
    learn: "Aprender",
    docs_short: "Docs",
    docs_long: "Documentación",
    download: "Descargar",
    community: "Comunidad",
};

const FR: Catalog = Catalog {
    learn: "Apprendre",
    docs_short: "Docs",
    docs_long: "Documentation",
    download: "Télécharger",
    community: "Communauté",
};

const JA: Catalog = Catalog {
    learn: "学ぶ",
    docs_short: "ドキュメント",
    docs_long: "ドキュメント",
    download: "ダウンロード",
    community: "コミュニティ",
};

fn catalog(locale: Locale) -> &'static Catalog {
    match locale.code {
        "es" => &ES,
        "fr" => &FR,
        "ja" => &JA,
        _ => &EN,
    }
}

/// Resolves a message for `locale`. The docs link uses its short form on
/// narrow viewports.
#[must_use]
pub fn message(locale: Locale, key: MessageKey, is_mobile: bool) -> &'static str {
    let catalog = catalog(locale);
    match key {
        MessageKey::HeaderLearn => catalog.learn,
        MessageKey::HeaderDocs if is_mobile => catalog.docs_short,
        MessageKey::HeaderDocs => catalog.docs_long,
        MessageKey::HeaderDownload => catalog.download,
        MessageKey::HeaderCommunity => catalog.community,
    }
}
