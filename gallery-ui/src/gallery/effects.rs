//! Async orchestration between the API client and view signals
//!
//! One direction per request cycle: user input -> action -> HTTP call ->
//! response into catalog state -> views re-derive. Failures land in view
//! state or the log; nothing retries automatically. Overlapping requests
//! are not sequenced; the last response to arrive wins.

use dioxus::prelude::{Signal, WritableExt};
use gloo_timers::future::TimeoutFuture;
use poem_types::Poem;

use crate::api::{self, PoemFilter};
use crate::gallery::catalog;
use crate::gallery::editor::{validate_draft, Editor, EditorMode};
use crate::gallery::search::{Debouncer, DEBOUNCE_MS};
use crate::gallery::session;
use crate::gallery::settings::BrowserSettings;

/// Replace the catalog with the server's answer for this filter. A failed
/// fetch leaves the previous list untouched, so the view stays in its
/// empty/loading shape rather than a partial one.
pub async fn load_catalog(
    filter: PoemFilter,
    mut poems: Signal<Vec<Poem>>,
    mut loading: Signal<bool>,
) {
    loading.set(true);

    match api::fetch_poems(&filter).await {
        Ok(list) => poems.set(list),
        Err(e) => {
            dioxus_logger::tracing::error!("failed to fetch poems: {}", e);
        }
    }

    loading.set(false);
}

/// Debounced catalog reload: wait out the quiet period, then fetch only
/// if no newer edit superseded this ticket.
pub async fn debounced_search(
    query: String,
    ticket: u64,
    debouncer: Signal<Debouncer>,
    poems: Signal<Vec<Poem>>,
    loading: Signal<bool>,
) {
    TimeoutFuture::new(DEBOUNCE_MS).await;

    if !debouncer().is_current(ticket) {
        return;
    }

    load_catalog(PoemFilter::search(&query), poems, loading).await;
}

/// Load one poem and its related rail (poems sharing its first tag, the
/// poem itself excluded). A failed fetch leaves the view in its loading
/// state.
pub async fn load_poem_detail(
    id: String,
    mut poem: Signal<Option<Poem>>,
    mut related: Signal<Vec<Poem>>,
) {
    let fetched = match api::fetch_poem(&id).await {
        Ok(fetched) => fetched,
        Err(e) => {
            dioxus_logger::tracing::error!("failed to fetch poem {}: {}", id, e);
            return;
        }
    };

    let rail_tag = fetched.tags.first().cloned();
    poem.set(Some(fetched));

    if let Some(tag) = rail_tag {
        match api::fetch_poems(&PoemFilter::tag(&tag)).await {
            Ok(list) => related.set(catalog::exclude_poem(&list, &id)),
            Err(e) => {
                dioxus_logger::tracing::error!("failed to fetch related poems: {}", e);
            }
        }
    }
}

/// Exchange credentials for a token. On failure the form keeps its values
/// and shows the error inline.
pub async fn submit_login(
    username: String,
    password: String,
    mut token: Signal<String>,
    mut error: Signal<Option<String>>,
    mut busy: Signal<bool>,
) {
    busy.set(true);
    error.set(None);

    match session::login(&BrowserSettings, &username, &password).await {
        Ok(t) => token.set(t),
        Err(e) => error.set(Some(e.to_string())),
    }

    busy.set(false);
}

/// Submit the open editor draft. Success closes the editor, drops the
/// draft, and refreshes the catalog with exactly one list fetch; failure
/// reopens the editor with the draft intact. Callers guarantee a
/// non-empty token; the dashboard never renders unauthenticated.
pub async fn submit_editor(
    token: String,
    cover: Option<web_sys::File>,
    mut editor: Signal<Editor>,
    poems: Signal<Vec<Poem>>,
    loading: Signal<bool>,
) {
    let (mode, draft) = match editor() {
        Editor::Open { mode, draft, .. } => (mode, draft),
        _ => return,
    };

    if let Err(e) = validate_draft(&draft) {
        editor.write().reject(e.to_string());
        return;
    }

    editor.write().begin_submit();

    let result = match &mode {
        EditorMode::Create => api::create_poem(&token, &draft, cover.as_ref()).await,
        EditorMode::Edit(poem) => api::update_poem(&token, &poem.id, &draft, cover.as_ref()).await,
    };

    match result {
        Ok(_) => {
            editor.write().submit_succeeded();
            load_catalog(PoemFilter::default(), poems, loading).await;
        }
        Err(e) => {
            editor.write().submit_failed(e.to_string());
        }
    }
}

/// Confirmed delete: one DELETE, then one catalog refresh regardless of
/// the response. Confirmation happens at the call site; unconfirmed
/// deletes never reach here.
pub async fn delete_poem_and_refresh(
    token: String,
    id: String,
    poems: Signal<Vec<Poem>>,
    loading: Signal<bool>,
) {
    if let Err(e) = api::delete_poem(&token, &id).await {
        dioxus_logger::tracing::error!("failed to delete poem {}: {}", id, e);
    }

    load_catalog(PoemFilter::default(), poems, loading).await;
}
