//! Plain list dropdown rendered under a toggle button.

use leptos::{
    html::{a, li, ul},
    prelude::*,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    pub title: String,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Renders `items` as a list of links; hidden unless `visible`.
pub fn component(items: Signal<Vec<DropdownItem>>, visible: Signal<bool>) -> impl IntoView {
    ul().class("dropdown-list")
        .class(("dropdown-list--hidden", move || !visible.get()))
        .attr("aria-hidden", move || (!visible.get()).to_string())
        .child(For(
            ForProps::builder()
                .each(move || items.get())
                .key(|item| item.href.clone())
                .children(|item| {
                    li().class("dropdown-item").child(
                        a().href(item.href)
                            .title(item.label)
                            .class("dropdown-link")
                            .class(("active", item.active))
                            .attr("aria-current", item.active.then_some("true"))
                            .child(item.title),
                    )
                })
                .build(),
        ))
}
