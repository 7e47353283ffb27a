use leptos::prelude::*;
use leptos_meta::Title;

use crate::site::DOCS_URL;

const GUIDES: [(&str, &str); 4] = [
    ("Introduction", "What the runtime is and how it executes JavaScript outside the browser."),
    ("The event loop", "How callbacks, timers and promises are scheduled."),
    ("Modules", "CommonJS and ECMAScript modules side by side."),
    ("npm", "Installing, versioning and publishing packages."),
];

pub fn component() -> impl IntoView {
    view! {
        <Title text="Learn"/>
        <section class="learn">
            <h1>"Learn"</h1>
            <ol class="learn__guides">
                {GUIDES
                    .into_iter()
                    .map(|(title, summary)| view! {
                        <li>
                            <h2>{title}</h2>
                            <p>{summary}</p>
                        </li>
                    })
                    .collect_view()}
            </ol>
            <p>
                "The complete API reference lives in the "
                <a href=DOCS_URL target="_blank" rel="noopener noreferrer">"documentation"</a>
                "."
            </p>
        </section>
    }
}
