use dioxus::prelude::*;
use poem_types::Poem;
use wasm_bindgen::JsCast;

use crate::api::{api_base, PoemFilter};
use crate::gallery::catalog;
use crate::gallery::editor::{Editor, EditorMode};
use crate::gallery::effects::{
    delete_poem_and_refresh, load_catalog, submit_editor, submit_login,
};
use crate::gallery::session;
use crate::gallery::theme::Theme;
use crate::views::{Header, LoadingState};

const COVER_INPUT_ID: &str = "poem-cover-input";

#[component]
pub fn AdminView(theme: Signal<Theme>, token: Signal<String>) -> Element {
    let authenticated = session::is_authenticated(&token.read());

    rsx! {
        div { class: "page",
            Header { theme, token }
            if authenticated {
                Dashboard { token }
            } else {
                LoginForm { token }
            }
        }
    }
}

#[component]
fn LoginForm(token: Signal<String>) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let error = use_signal(|| None::<String>);
    let busy = use_signal(|| false);

    rsx! {
        div { class: "login-wrap",
            form {
                class: "login-card",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    spawn(submit_login(
                        username.to_string(),
                        password.to_string(),
                        token,
                        error,
                        busy,
                    ));
                },
                h2 { class: "login-title", "Admin Login" }
                input {
                    class: "field",
                    placeholder: "Username",
                    required: true,
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
                if let Some(message) = error.read().as_ref() {
                    p { class: "form-error", "{message}" }
                }
                button { class: "btn-primary", disabled: busy(),
                    if busy() { "Logging in..." } else { "Login" }
                }
            }
        }
    }
}

#[component]
fn Dashboard(token: Signal<String>) -> Element {
    let poems = use_signal(Vec::<Poem>::new);
    let loading = use_signal(|| false);
    let mut editor = use_signal(Editor::default);

    use_effect(move || {
        spawn(load_catalog(PoemFilter::default(), poems, loading));
    });

    let open_create = use_callback(move |_: ()| {
        editor.set(Editor::open_create());
    });

    let open_edit = use_callback(move |poem: Poem| {
        editor.set(Editor::open_edit(poem));
    });

    // Unconfirmed deletes make no network call at all.
    let on_delete = use_callback(move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this poem?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn(delete_poem_and_refresh(token.to_string(), id, poems, loading));
    });

    let list = poems.read();
    let stats = catalog::stats(&list);

    rsx! {
        div { class: "admin-wrap",
            div { class: "admin-bar",
                h2 { class: "admin-heading", "Admin Dashboard" }
            }
            div { class: "stats-card",
                div { class: "stat",
                    div { class: "stat-label", "Total Poems" }
                    div { class: "stat-value", "{stats.total}" }
                }
                div { class: "stat",
                    div { class: "stat-label", "Featured" }
                    div { class: "stat-value", "{stats.featured}" }
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| open_create.call(()),
                    "+ New Poem"
                }
            }
            if loading() && list.is_empty() {
                LoadingState { label: "Loading poems..." }
            }
            div { class: "admin-grid",
                for poem in list.iter() {
                    AdminCard {
                        key: "{poem.id}",
                        poem: poem.clone(),
                        on_edit: open_edit,
                        on_delete: on_delete,
                    }
                }
            }
            if editor.read().is_open() {
                EditorModal { editor, token, poems, loading }
            }
        }
    }
}

#[component]
fn AdminCard(poem: Poem, on_edit: Callback<Poem>, on_delete: Callback<String>) -> Element {
    let cover = poem
        .cover_image
        .as_deref()
        .map(|c| catalog::resolve_cover_url(api_base(), c));
    let poem_for_edit = poem.clone();
    let id_for_delete = poem.id.clone();

    rsx! {
        div { class: "admin-card",
            div { class: "admin-card-cover",
                if let Some(cover) = cover {
                    img { class: "card-image", src: "{cover}", alt: "{poem.title}" }
                }
            }
            div { class: "admin-card-body",
                div { class: "card-title-row",
                    h4 { class: "card-title", "{poem.title}" }
                    if poem.is_featured {
                        span { class: "card-star", "★" }
                    }
                }
                p { class: "card-excerpt", "{poem.excerpt}" }
                div { class: "admin-card-actions",
                    button {
                        class: "btn-ghost",
                        onclick: move |_| on_edit.call(poem_for_edit.clone()),
                        "Edit"
                    }
                    button {
                        class: "btn-danger",
                        onclick: move |_| on_delete.call(id_for_delete.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn EditorModal(
    mut editor: Signal<Editor>,
    token: Signal<String>,
    poems: Signal<Vec<Poem>>,
    loading: Signal<bool>,
) -> Element {
    let (draft, submitting, error, heading) = {
        let state = editor.read();
        match &*state {
            Editor::Open { mode, draft, error } => (
                draft.clone(),
                false,
                error.clone(),
                heading_for(mode),
            ),
            Editor::Submitting { mode, draft } => (draft.clone(), true, None, heading_for(mode)),
            Editor::Closed => return rsx! {},
        }
    };

    rsx! {
        div { class: "modal-backdrop",
            form {
                class: "modal-card",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    let cover = selected_cover_file();
                    spawn(submit_editor(token.to_string(), cover, editor, poems, loading));
                },
                div { class: "modal-heading", "{heading}" }
                input {
                    class: "field",
                    placeholder: "Title",
                    required: true,
                    value: "{draft.title}",
                    oninput: move |e| {
                        if let Editor::Open { draft, .. } = &mut *editor.write() {
                            draft.title = e.value();
                        }
                    },
                }
                input {
                    class: "field",
                    placeholder: "Excerpt",
                    required: true,
                    value: "{draft.excerpt}",
                    oninput: move |e| {
                        if let Editor::Open { draft, .. } = &mut *editor.write() {
                            draft.excerpt = e.value();
                        }
                    },
                }
                textarea {
                    class: "field",
                    placeholder: "Full poem text",
                    required: true,
                    value: "{draft.content}",
                    oninput: move |e| {
                        if let Editor::Open { draft, .. } = &mut *editor.write() {
                            draft.content = e.value();
                        }
                    },
                }
                input {
                    class: "field",
                    placeholder: "tags (comma separated)",
                    value: "{draft.tags}",
                    oninput: move |e| {
                        if let Editor::Open { draft, .. } = &mut *editor.write() {
                            draft.tags = e.value();
                        }
                    },
                }
                label { class: "check-row",
                    input {
                        r#type: "checkbox",
                        checked: draft.is_featured,
                        oninput: move |e| {
                            if let Editor::Open { draft, .. } = &mut *editor.write() {
                                draft.is_featured = e.checked();
                            }
                        },
                    }
                    "Featured"
                }
                input { id: COVER_INPUT_ID, r#type: "file", accept: "image/*" }
                if let Some(message) = error {
                    p { class: "form-error", "{message}" }
                }
                div { class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn-ghost",
                        onclick: move |_| editor.write().close(),
                        "Cancel"
                    }
                    button { class: "btn-primary", disabled: submitting,
                        if submitting { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}

fn heading_for(mode: &EditorMode) -> &'static str {
    match mode {
        EditorMode::Create => "New Poem",
        EditorMode::Edit(_) => "Edit Poem",
    }
}

/// The optional cover file from the uncontrolled file input.
fn selected_cover_file() -> Option<web_sys::File> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(COVER_INPUT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}
