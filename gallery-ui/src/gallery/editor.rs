//! Admin poem editor state machine
//!
//! One edit session runs Closed -> Open(Create | Edit) -> Submitting and
//! back: Closed on success, Open again with the user's draft preserved on
//! failure.

use poem_types::Poem;

use crate::api::PoemInput;
use crate::error::GalleryError;

/// What an open editor is working on.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Create,
    Edit(Poem),
}

/// Editor modal state for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Editor {
    #[default]
    Closed,
    Open {
        mode: EditorMode,
        draft: PoemInput,
        /// Save or validation failure shown inline; the draft stays
        /// editable.
        error: Option<String>,
    },
    Submitting {
        mode: EditorMode,
        draft: PoemInput,
    },
}

impl Editor {
    pub fn open_create() -> Self {
        Editor::Open {
            mode: EditorMode::Create,
            draft: PoemInput::default(),
            error: None,
        }
    }

    /// Prefill the draft from an existing poem, tags comma-joined.
    pub fn open_edit(poem: Poem) -> Self {
        let draft = PoemInput {
            title: poem.title.clone(),
            excerpt: poem.excerpt.clone(),
            content: poem.content.clone(),
            tags: join_tags(&poem.tags),
            is_featured: poem.is_featured,
        };
        Editor::Open {
            mode: EditorMode::Edit(poem),
            draft,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    /// Show an error on the open editor without losing the draft.
    pub fn reject(&mut self, message: String) {
        let state = std::mem::take(self);
        *self = match state {
            Editor::Open { mode, draft, .. } => Editor::Open {
                mode,
                draft,
                error: Some(message),
            },
            other => other,
        };
    }

    pub fn begin_submit(&mut self) {
        let state = std::mem::take(self);
        *self = match state {
            Editor::Open { mode, draft, .. } => Editor::Submitting { mode, draft },
            other => other,
        };
    }

    /// Save rejected: back to Open with the draft intact for retry.
    pub fn submit_failed(&mut self, message: String) {
        let state = std::mem::take(self);
        *self = match state {
            Editor::Submitting { mode, draft } => Editor::Open {
                mode,
                draft,
                error: Some(message),
            },
            other => other,
        };
    }

    /// Save accepted: close and drop the draft.
    pub fn submit_succeeded(&mut self) {
        *self = Editor::Closed;
    }

    pub fn close(&mut self) {
        *self = Editor::Closed;
    }
}

/// Required-field check mirroring the form's `required` inputs; runs
/// before any network call.
pub fn validate_draft(draft: &PoemInput) -> Result<(), GalleryError> {
    if draft.title.trim().is_empty() {
        return Err(GalleryError::Validation("title"));
    }
    if draft.excerpt.trim().is_empty() {
        return Err(GalleryError::Validation("excerpt"));
    }
    if draft.content.trim().is_empty() {
        return Err(GalleryError::Validation("content"));
    }
    Ok(())
}

/// Comma-joined rendering used to prefill the tags field.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_poem() -> Poem {
        Poem {
            id: "p1".to_string(),
            title: "Night Rain".to_string(),
            excerpt: "short".to_string(),
            content: "full text".to_string(),
            tags: vec!["rain".to_string(), "night".to_string()],
            is_featured: true,
            ..Poem::default()
        }
    }

    fn valid_draft() -> PoemInput {
        PoemInput {
            title: "t".to_string(),
            excerpt: "e".to_string(),
            content: "c".to_string(),
            ..PoemInput::default()
        }
    }

    #[test]
    fn create_opens_with_empty_defaults() {
        let editor = Editor::open_create();
        match editor {
            Editor::Open { mode, draft, error } => {
                assert_eq!(mode, EditorMode::Create);
                assert_eq!(draft, PoemInput::default());
                assert!(error.is_none());
            }
            _ => panic!("expected open editor"),
        }
    }

    #[test]
    fn edit_prefills_the_draft_with_comma_joined_tags() {
        let poem = sample_poem();
        match Editor::open_edit(poem.clone()) {
            Editor::Open { mode, draft, .. } => {
                assert_eq!(mode, EditorMode::Edit(poem));
                assert_eq!(draft.title, "Night Rain");
                assert_eq!(draft.tags, "rain, night");
                assert!(draft.is_featured);
            }
            _ => panic!("expected open editor"),
        }
    }

    #[test]
    fn failed_submit_returns_to_open_with_the_draft_intact() {
        let mut editor = Editor::open_create();
        if let Editor::Open { draft, .. } = &mut editor {
            draft.title = "kept".to_string();
        }

        editor.begin_submit();
        assert!(matches!(editor, Editor::Submitting { .. }));

        editor.submit_failed("save failed: HTTP error: 500".to_string());
        match editor {
            Editor::Open { draft, error, .. } => {
                assert_eq!(draft.title, "kept");
                assert!(error.unwrap().contains("500"));
            }
            _ => panic!("expected open editor after failure"),
        }
    }

    #[test]
    fn successful_submit_closes_and_resets() {
        let mut editor = Editor::open_edit(sample_poem());
        editor.begin_submit();
        editor.submit_succeeded();
        assert_eq!(editor, Editor::Closed);
        assert!(!editor.is_open());
    }

    #[test]
    fn reject_keeps_the_editor_open_with_a_message() {
        let mut editor = Editor::open_create();
        editor.reject("title is required".to_string());
        match editor {
            Editor::Open { error, .. } => {
                assert_eq!(error.as_deref(), Some("title is required"));
            }
            _ => panic!("expected open editor"),
        }
    }

    #[test]
    fn validation_requires_title_excerpt_and_content() {
        assert_eq!(
            validate_draft(&PoemInput::default()),
            Err(GalleryError::Validation("title"))
        );

        let mut draft = valid_draft();
        assert_eq!(validate_draft(&draft), Ok(()));

        draft.content = "   ".to_string();
        assert_eq!(
            validate_draft(&draft),
            Err(GalleryError::Validation("content"))
        );
    }
}
