use leptos::{ev, prelude::*};

/// Viewport width at which the header switches to its compact labels.
pub const MOBILE_QUERY: &str = "(max-width: 870px)";

/// Tracks whether `query` currently matches the viewport.
///
/// Always `false` while rendering on the server and until the component
/// mounts in the browser; afterwards re-evaluated on every window resize.
pub fn use_media_query(query: &'static str) -> Signal<bool> {
    let (matches, set_matches) = signal(false);

    Effect::new(move |_| {
        set_matches.set(evaluate(query));
        let handle = window_event_listener(ev::resize, move |_| {
            set_matches.set(evaluate(query));
        });
        on_cleanup(move || handle.remove());
    });

    matches.into()
}

fn evaluate(query: &str) -> bool {
    window()
        .match_media(query)
        .ok()
        .flatten()
        .is_some_and(|list| list.matches())
}
