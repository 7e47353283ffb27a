use leptos::prelude::*;
use leptos_meta::Title;

#[derive(Clone, Copy)]
struct Channel {
    name: &'static str,
    description: &'static str,
}

const CHANNELS: [Channel; 2] = [
    Channel {
        name: "LTS",
        description: "Recommended for most users. Receives fixes for thirty months.",
    },
    Channel {
        name: "Current",
        description: "Latest features. Becomes LTS when the next even release line is cut.",
    },
];

const PLATFORMS: [&str; 3] = ["Windows Installer", "macOS Installer", "Linux Binaries"];

pub fn component() -> impl IntoView {
    view! {
        <Title text="Download"/>
        <section class="download">
            <h1>"Downloads"</h1>
            <div class="download__channels">
                {CHANNELS
                    .into_iter()
                    .map(|channel| view! {
                        <article class="download__channel">
                            <h2>{channel.name}</h2>
                            <p>{channel.description}</p>
                            <ul>
                                {PLATFORMS.into_iter().map(|platform| view! { <li>{platform}</li> }).collect_view()}
                            </ul>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
