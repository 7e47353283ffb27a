use leptos::prelude::*;
use leptos_meta::Title;

use crate::site::GITHUB_URL;

pub fn component() -> impl IntoView {
    view! {
        <Title text="Community"/>
        <section class="community">
            <h1>"Community"</h1>
            <p>
                "Everyone is welcome to contribute. Issues and pull requests are tracked on "
                <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">"GitHub"</a>
                "."
            </p>
            <ul class="community__links">
                <li>"Code of Conduct"</li>
                <li>"Working Groups"</li>
                <li>"Collaborator Summit"</li>
            </ul>
        </section>
    }
}
