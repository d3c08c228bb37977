//! Dioxus views over the gallery core
//!
//! Components stay thin: derivations come from `gallery::catalog`, async
//! work goes through `gallery::effects`, and the location decides which
//! top-level view renders.

use dioxus::prelude::*;
use poem_types::Poem;

use crate::api::api_base;
use crate::gallery::catalog;
use crate::gallery::router::{current_route, Route};
use crate::gallery::session;
use crate::gallery::settings::BrowserSettings;
use crate::gallery::theme::{apply_theme_to_document, load_theme, save_theme, Theme};

mod admin;
mod detail;
mod home;

pub use admin::AdminView;
pub use detail::DetailView;
pub use home::HomeView;

#[component]
pub fn App() -> Element {
    let route = use_signal(current_route);
    let theme = use_signal(|| load_theme(&BrowserSettings));
    let token = use_signal(|| session::load_token(&BrowserSettings));

    // Reflect the theme onto the document root on first render and on
    // every change.
    use_effect(move || {
        apply_theme_to_document(theme());
    });

    let view = match route() {
        Route::Home => rsx! {
            HomeView { theme, token }
        },
        Route::PoemDetail(id) => rsx! {
            DetailView { id, theme, token }
        },
        Route::Admin => rsx! {
            AdminView { theme, token }
        },
    };

    rsx! {
        style { {GALLERY_TOKENS} }
        {view}
    }
}

// ============================================================================
// Shared Components
// ============================================================================

#[component]
pub fn Header(
    mut theme: Signal<Theme>,
    mut token: Signal<String>,
    query: Option<Signal<String>>,
    on_search: Option<Callback<String>>,
) -> Element {
    let search_box = match (query, on_search) {
        (Some(query), Some(on_search)) => rsx! {
            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search poems...",
                value: "{query}",
                oninput: move |e| on_search.call(e.value()),
            }
        },
        _ => rsx! {},
    };

    rsx! {
        header { class: "site-header",
            a { class: "brand", href: "/", "Poetry Gallery" }
            div { class: "header-spacer" }
            {search_box}
            button {
                class: "header-btn",
                title: "Toggle theme",
                onclick: move |_| {
                    let next = theme().toggled();
                    save_theme(&BrowserSettings, next);
                    theme.set(next);
                },
                if theme() == Theme::Dark { "☀" } else { "🌙" }
            }
            if session::is_authenticated(&token.read()) {
                button {
                    class: "header-btn",
                    title: "Log out",
                    onclick: move |_| {
                        session::clear_token(&BrowserSettings);
                        token.set(String::new());
                    },
                    "Log out"
                }
            } else {
                a { class: "header-btn", href: "/admin", "Admin" }
            }
        }
    }
}

#[component]
pub fn Hero(featured: Option<Poem>) -> Element {
    let (title, excerpt, link) = match &featured {
        Some(poem) => (
            poem.title.clone(),
            poem.excerpt.clone(),
            format!("/poem/{}", poem.id),
        ),
        None => ("Featured Poem".to_string(), String::new(), "#".to_string()),
    };

    rsx! {
        section { class: "hero",
            div { class: "hero-copy",
                div { class: "hero-kicker", "Featured" }
                h1 { class: "hero-title", "{title}" }
                p { class: "hero-excerpt", "{excerpt}" }
                a { class: "hero-link", href: "{link}", "Read ›" }
            }
        }
    }
}

#[component]
pub fn Carousel(title: String, poems: Vec<Poem>) -> Element {
    rsx! {
        section { class: "carousel",
            h3 { class: "carousel-title", "{title}" }
            div { class: "carousel-track",
                for poem in poems {
                    PoemCard { key: "{poem.id}", poem: poem.clone() }
                }
            }
        }
    }
}

#[component]
pub fn PoemCard(poem: Poem) -> Element {
    let cover = poem
        .cover_image
        .as_deref()
        .map(|c| catalog::resolve_cover_url(api_base(), c));

    rsx! {
        a { class: "poem-card", href: "/poem/{poem.id}",
            div { class: "card-cover",
                if let Some(cover) = cover {
                    img { class: "card-image", src: "{cover}", alt: "{poem.title}" }
                } else {
                    div { class: "card-fallback", "{poem.title}" }
                }
            }
            div { class: "card-meta",
                div { class: "card-title-row",
                    if poem.is_featured {
                        span { class: "card-star", "★" }
                    }
                    h4 { class: "card-title", "{poem.title}" }
                }
                p { class: "card-excerpt", "{poem.excerpt}" }
            }
        }
    }
}

#[component]
pub fn LoadingState(label: String) -> Element {
    rsx! {
        div { class: "loading-state", "{label}" }
    }
}

// ============================================================================
// Default CSS Tokens (themes override via data-theme)
// ============================================================================

const GALLERY_TOKENS: &str = r#"
:root {
    --bg-primary: #0b0b0f;
    --bg-secondary: #16161d;
    --text-primary: #f5f2ee;
    --text-secondary: #a8a29e;
    --text-muted: #6b6560;
    --accent-bg: #e11d48;
    --accent-bg-hover: #be123c;
    --border-color: #2a2a33;
    --card-bg: var(--bg-secondary);
    --header-bg: rgba(11, 11, 15, 0.85);
    --input-bg: #1d1d26;
    --danger-bg: #e11d48;
    --star-color: #facc15;
    --hero-gradient: linear-gradient(135deg, #3b0d1d, #0b0b0f 70%);

    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

:root[data-theme="light"] {
    --bg-primary: #faf7f2;
    --bg-secondary: #ffffff;
    --text-primary: #1c1917;
    --text-secondary: #57534e;
    --text-muted: #a8a29e;
    --accent-bg: #be123c;
    --accent-bg-hover: #9f1239;
    --border-color: #e7e5e4;
    --card-bg: #ffffff;
    --header-bg: rgba(250, 247, 242, 0.9);
    --input-bg: #f5f5f4;
    --danger-bg: #dc2626;
    --hero-gradient: linear-gradient(135deg, #fecdd3, #faf7f2 70%);
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.12);
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.page {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.75rem 1.5rem;
    background: var(--header-bg);
    backdrop-filter: blur(8px);
    border-bottom: 1px solid var(--border-color);
}

.brand {
    font-weight: 700;
    letter-spacing: 0.04em;
    font-size: 1.125rem;
    color: var(--text-primary);
    text-decoration: none;
}

.header-spacer {
    flex: 1;
}

.search-input {
    width: 100%;
    max-width: 24rem;
    padding: 0.5rem 1rem;
    background: var(--input-bg);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    font-size: 0.875rem;
    outline: none;
}

.header-btn {
    padding: 0.5rem 0.75rem;
    background: var(--input-bg);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    cursor: pointer;
    font-size: 0.875rem;
    text-decoration: none;
}

.header-btn:hover {
    border-color: var(--accent-bg);
}

/* Hero */
.hero {
    position: relative;
    min-height: 320px;
    display: flex;
    align-items: flex-end;
    background: var(--hero-gradient);
}

.hero-copy {
    padding: 2.5rem 3rem;
    max-width: 42rem;
}

.hero-kicker {
    font-size: 0.75rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--text-secondary);
}

.hero-title {
    margin: 0.25rem 0 0;
    font-family: Georgia, 'Times New Roman', serif;
    font-size: 2.5rem;
    line-height: 1.1;
}

.hero-excerpt {
    margin-top: 0.75rem;
    color: var(--text-secondary);
}

.hero-link {
    display: inline-block;
    margin-top: 1rem;
    padding: 0.5rem 1rem;
    background: var(--accent-bg);
    color: white;
    border-radius: var(--radius-md);
    text-decoration: none;
}

.hero-link:hover {
    background: var(--accent-bg-hover);
}

/* Carousels */
.rails {
    max-width: 72rem;
    width: 100%;
    margin: 0 auto;
    padding: 0 1.5rem 3rem;
}

.carousel {
    margin-top: 1.5rem;
}

.carousel-title {
    margin: 0 0 0.5rem;
    font-weight: 600;
}

.carousel-track {
    display: flex;
    gap: 1rem;
    overflow-x: auto;
    padding-bottom: 0.75rem;
}

.poem-card {
    width: 14rem;
    flex-shrink: 0;
    color: var(--text-primary);
    text-decoration: none;
}

.card-cover {
    aspect-ratio: 3 / 4;
    border-radius: var(--radius-lg);
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    overflow: hidden;
}

.card-image {
    width: 100%;
    height: 100%;
    object-fit: cover;
    display: block;
}

.card-fallback {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    font-family: Georgia, serif;
    color: var(--text-secondary);
    text-align: center;
}

.card-meta {
    margin-top: 0.5rem;
}

.card-title-row {
    display: flex;
    align-items: center;
    gap: 0.25rem;
}

.card-star {
    color: var(--star-color);
}

.card-title {
    margin: 0;
    font-weight: 500;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.card-excerpt {
    margin: 0.25rem 0 0;
    font-size: 0.875rem;
    color: var(--text-secondary);
    display: -webkit-box;
    -webkit-line-clamp: 2;
    -webkit-box-orient: vertical;
    overflow: hidden;
}

/* Poem detail */
.poem-detail {
    max-width: 46rem;
    width: 100%;
    margin: 0 auto;
    padding: 2rem 1.5rem;
}

.detail-title {
    margin: 0;
    font-family: Georgia, serif;
    font-size: 2.5rem;
}

.detail-date {
    margin-top: 0.5rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.detail-cover {
    margin-top: 1.5rem;
    width: 100%;
    border-radius: var(--radius-lg);
}

.poem-content {
    margin-top: 1.5rem;
    white-space: pre-wrap;
    font-family: Georgia, serif;
    font-size: 1.125rem;
    line-height: 1.7;
}

.tag-row {
    margin-top: 1.5rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.tag-chip {
    font-size: 0.75rem;
    padding: 0.25rem 0.6rem;
    border-radius: 999px;
    background: var(--input-bg);
    border: 1px solid var(--border-color);
    color: var(--text-secondary);
}

/* Login */
.login-wrap {
    flex: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 2rem;
}

.login-card {
    width: 100%;
    max-width: 22rem;
    padding: 1.5rem;
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-lg);
}

.login-title {
    margin: 0 0 1rem;
}

.field {
    width: 100%;
    margin-bottom: 0.75rem;
    padding: 0.5rem 0.75rem;
    background: var(--input-bg);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    font-size: 0.9375rem;
    font-family: inherit;
    outline: none;
}

.field:focus {
    border-color: var(--accent-bg);
}

textarea.field {
    min-height: 10rem;
    resize: vertical;
}

.form-error {
    margin: 0 0 0.75rem;
    font-size: 0.875rem;
    color: var(--danger-bg);
}

.btn-primary {
    padding: 0.5rem 1rem;
    background: var(--accent-bg);
    color: white;
    border: none;
    border-radius: var(--radius-md);
    cursor: pointer;
}

.btn-primary:hover:not(:disabled) {
    background: var(--accent-bg-hover);
}

.btn-primary:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

.btn-ghost {
    padding: 0.4rem 0.75rem;
    background: var(--input-bg);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-md);
    cursor: pointer;
}

.btn-danger {
    padding: 0.4rem 0.75rem;
    background: var(--danger-bg);
    color: white;
    border: none;
    border-radius: var(--radius-md);
    cursor: pointer;
}

/* Admin */
.admin-wrap {
    max-width: 72rem;
    width: 100%;
    margin: 0 auto;
    padding: 1.5rem;
}

.admin-bar {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.admin-heading {
    margin: 0;
}

.stats-card {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1rem 1.5rem;
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-lg);
}

.stat-label {
    font-size: 0.875rem;
    color: var(--text-secondary);
}

.stat-value {
    font-size: 1.5rem;
    font-weight: 600;
}

.admin-grid {
    margin-top: 1.5rem;
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
    gap: 1rem;
}

.admin-card {
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-lg);
    overflow: hidden;
}

.admin-card-cover {
    aspect-ratio: 16 / 9;
    background: var(--input-bg);
}

.admin-card-body {
    padding: 1rem;
}

.admin-card-actions {
    margin-top: 0.75rem;
    display: flex;
    gap: 0.5rem;
}

/* Editor modal */
.modal-backdrop {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.6);
}

.modal-card {
    width: 100%;
    max-width: 32rem;
    max-height: 90vh;
    overflow-y: auto;
    padding: 1.5rem;
    background: var(--card-bg);
    border: 1px solid var(--border-color);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-lg);
}

.modal-heading {
    font-size: 1.125rem;
    font-weight: 600;
    margin-bottom: 1rem;
}

.check-row {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.75rem;
    font-size: 0.875rem;
}

.modal-actions {
    margin-top: 1rem;
    display: flex;
    justify-content: flex-end;
    gap: 0.5rem;
}

.loading-state {
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 3rem 1rem;
    color: var(--text-muted);
}
"#;
