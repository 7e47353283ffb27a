//! Reactive helpers composed by the header.
//!
//! Each sub-module wraps one browser or server concern (theme, viewport
//! width, feature toggles, locale selection, dropdown visibility) behind a
//! `use_*` function that is safe to call during server-side rendering.

pub mod auto_closable_dropdown;
pub mod feature_toggles;
pub mod locale_dropdown;
pub mod media_query;
pub mod theme;
