use dioxus::prelude::*;
use poem_types::Poem;

use crate::api::PoemFilter;
use crate::gallery::catalog;
use crate::gallery::effects::{debounced_search, load_catalog};
use crate::gallery::search::Debouncer;
use crate::gallery::theme::Theme;
use crate::views::{Carousel, Header, Hero, LoadingState};

#[component]
pub fn HomeView(theme: Signal<Theme>, token: Signal<String>) -> Element {
    let poems = use_signal(Vec::<Poem>::new);
    let mut query = use_signal(String::new);
    let loading = use_signal(|| false);
    let mut debouncer = use_signal(Debouncer::default);

    // One immediate fetch on mount regardless of query state.
    use_effect(move || {
        spawn(load_catalog(PoemFilter::default(), poems, loading));
    });

    let on_search = use_callback(move |next: String| {
        query.set(next.clone());
        let ticket = debouncer.write().arm();
        spawn(debounced_search(next, ticket, debouncer, poems, loading));
    });

    // A timer that outlives the view must not fetch into it.
    use_drop(move || {
        debouncer.write().cancel();
    });

    let list = poems.read();
    let hero = catalog::featured(&list);
    let featured_rail = catalog::featured_rail(&list);
    let recent = catalog::recent(&list);
    let buckets: Vec<(&str, Vec<Poem>)> = catalog::HOME_TAG_BUCKETS
        .iter()
        .map(|tag| (*tag, catalog::by_tag(&list, tag)))
        .filter(|(_, bucket)| !bucket.is_empty())
        .collect();

    rsx! {
        div { class: "page",
            Header {
                theme,
                token,
                query: Some(query),
                on_search: Some(on_search),
            }
            Hero { featured: hero }
            main { class: "rails",
                if loading() && list.is_empty() {
                    LoadingState { label: "Loading poems..." }
                }
                if !featured_rail.is_empty() {
                    Carousel { title: "Featured", poems: featured_rail }
                }
                Carousel { title: "Recent", poems: recent }
                for (tag, bucket) in buckets {
                    Carousel { key: "{tag}", title: format!("#{tag}"), poems: bucket }
                }
            }
        }
    }
}
