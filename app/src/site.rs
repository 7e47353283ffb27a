//! Static navigation model shared by the header, the search page and the
//! server-side sitemap.

use crate::i18n::MessageKey;

pub const DOCS_URL: &str = "https://nodejs.org/en/docs/";
pub const GITHUB_URL: &str = "https://github.com/nodejs/nodejs.dev";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Site-relative path, localized before rendering.
    Internal(&'static str),
    /// Absolute URL opened in a new tab.
    External(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    pub label: MessageKey,
    pub target: NavTarget,
}

pub const HEADER_TABS: [NavTab; 4] = [
    NavTab {
        label: MessageKey::HeaderLearn,
        target: NavTarget::Internal("/learn"),
    },
    NavTab {
        label: MessageKey::HeaderDocs,
        target: NavTarget::External(DOCS_URL),
    },
    NavTab {
        label: MessageKey::HeaderDownload,
        target: NavTarget::Internal("/download"),
    },
    NavTab {
        label: MessageKey::HeaderCommunity,
        target: NavTarget::Internal("/community"),
    },
];

/// Whether a link to `to` counts as active while `current` is displayed.
///
/// Matches the target itself and anything below it on a segment boundary,
/// so `/learn` is active on `/learn/getting-started` but not on `/learners`.
#[must_use]
pub fn is_partially_active(current: &str, to: &str) -> bool {
    let to = to.trim_end_matches('/');
    if to.is_empty() {
        return current == "/" || current.is_empty();
    }
    current
        .strip_prefix(to)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// A content page reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SitePage {
    pub path: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// Sitemap change frequency.
    pub changefreq: &'static str,
    pub priority: &'static str,
}

pub const SITE_PAGES: [SitePage; 4] = [
    SitePage {
        path: "/",
        title: "Home",
        summary: "An open-source, cross-platform JavaScript runtime environment.",
        changefreq: "daily",
        priority: "1.0",
    },
    SitePage {
        path: "/learn",
        title: "Learn",
        summary: "Introductory guides covering the event loop, modules and npm.",
        changefreq: "weekly",
        priority: "0.9",
    },
    SitePage {
        path: "/download",
        title: "Download",
        summary: "Installers and binaries for current and long-term support releases.",
        changefreq: "daily",
        priority: "0.9",
    },
    SitePage {
        path: "/community",
        title: "Community",
        summary: "Ways to contribute, code of conduct and working groups.",
        changefreq: "monthly",
        priority: "0.6",
    },
];

/// Pages whose title or summary contains `query`, ignoring case.
#[must_use]
pub fn matching_pages(query: &str) -> Vec<SitePage> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    SITE_PAGES
        .iter()
        .filter(|page| {
            page.title.to_lowercase().contains(&needle)
                || page.summary.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}
