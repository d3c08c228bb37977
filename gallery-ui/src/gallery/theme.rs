use crate::gallery::settings::{SettingsStore, THEME_KEY};

/// Persisted presentation mode. Dark is the default when nothing is
/// stored or the stored value is unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

pub fn load_theme<S: SettingsStore>(store: &S) -> Theme {
    store
        .get(THEME_KEY)
        .map(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn save_theme<S: SettingsStore>(store: &S, theme: Theme) {
    store.set(THEME_KEY, theme.as_str());
}

/// Reflect the theme onto the document root so every consumer stays
/// visually consistent without polling.
pub fn apply_theme_to_document(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::settings::MemorySettings;

    #[test]
    fn unknown_values_fall_back_to_dark() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
    }

    #[test]
    fn toggle_flips_between_the_two_modes() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn load_defaults_to_dark_on_an_empty_store() {
        let store = MemorySettings::default();
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn saved_theme_loads_back() {
        let store = MemorySettings::default();
        save_theme(&store, Theme::Light);
        assert_eq!(load_theme(&store), Theme::Light);
    }
}
