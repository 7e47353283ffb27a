use icondata::Icon;
use leptos::{prelude::*, svg::svg};

/// Inline SVG for an `icondata` icon.
pub fn icon(icon: Icon, class: &'static str) -> impl IntoView {
    svg()
        .attr("viewBox", icon.view_box)
        .inner_html(icon.data)
        .attr("fill", "currentColor")
        .attr("aria-hidden", "true")
        .attr("focusable", "false")
        .class(class)
}

pub fn night() -> impl IntoView {
    icon(icondata::BsMoonStars, "light-mode-only theme-buttons")
}

pub fn brightness() -> impl IntoView {
    icon(icondata::BsCircleHalf, "dark-mode-only theme-buttons")
}

pub fn translate() -> impl IntoView {
    icon(icondata::BsTranslate, "theme-buttons")
}

/// GitHub mark tinted with the accent color.
pub fn github() -> impl IntoView {
    let icon = icondata::BsGithub;
    svg()
        .attr("viewBox", icon.view_box)
        .inner_html(icon.data)
        .attr("fill", "currentColor")
        .attr("color", "var(--color-text-accent)")
        .attr("aria-hidden", "true")
        .attr("focusable", "false")
        .attr("style", "padding: 1rem; width: 2rem; height: 2rem")
        .class("github-icon")
}
