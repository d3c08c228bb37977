use dioxus::prelude::*;
use poem_types::Poem;

use crate::api::api_base;
use crate::gallery::catalog;
use crate::gallery::effects::load_poem_detail;
use crate::gallery::theme::Theme;
use crate::views::{Carousel, Header, LoadingState};

#[component]
pub fn DetailView(id: String, theme: Signal<Theme>, token: Signal<String>) -> Element {
    let poem = use_signal(|| None::<Poem>);
    let related = use_signal(Vec::<Poem>::new);
    let id_signal = use_signal(|| id.clone());

    use_effect(move || {
        let id = id_signal.to_string();
        spawn(load_poem_detail(id, poem, related));
    });

    let current = poem.read();
    let related_rail = related.read().clone();

    // Fetch failure or a nonexistent id leaves the loading state, never
    // a partial poem.
    let body = match current.as_ref() {
        Some(poem) => {
            let title = poem.title.clone();
            let content = poem.content.clone();
            let tags = poem.tags.clone();
            let created = poem
                .created_at
                .map(|t| t.format("%B %e, %Y").to_string());
            let cover = poem
                .cover_image
                .as_deref()
                .map(|c| catalog::resolve_cover_url(api_base(), c));

            rsx! {
                article { class: "poem-detail",
                    h1 { class: "detail-title", "{title}" }
                    if let Some(created) = created {
                        div { class: "detail-date", "{created}" }
                    }
                    if let Some(cover) = cover {
                        img { class: "detail-cover", src: "{cover}", alt: "{title}" }
                    }
                    pre { class: "poem-content", "{content}" }
                    if !tags.is_empty() {
                        div { class: "tag-row",
                            for tag in tags {
                                span { class: "tag-chip", "#{tag}" }
                            }
                        }
                    }
                }
                if !related_rail.is_empty() {
                    div { class: "rails",
                        Carousel { title: "Related", poems: related_rail.clone() }
                    }
                }
            }
        }
        None => rsx! {
            LoadingState { label: "Loading poem..." }
        },
    };

    rsx! {
        div { class: "page",
            Header { theme, token }
            {body}
        }
    }
}
