//! Light/dark preference: persistence behind a small get/set interface and
//! the visuals applied for each choice.

use eframe::egui;

pub const THEME_STORAGE_KEY: &str = "theme";

pub trait PreferenceStore {
    fn get_preference(&self, key: &str) -> Option<String>;
    fn set_preference(&mut self, key: &str, value: &str);
}

impl<S: eframe::Storage + ?Sized> PreferenceStore for S {
    fn get_preference(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn set_preference(&mut self, key: &str, value: &str) {
        self.set_string(key, value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn egui_theme(self) -> egui::Theme {
        match self {
            ThemePreference::Light => egui::Theme::Light,
            ThemePreference::Dark => egui::Theme::Dark,
        }
    }

    /// Icon for the toggle button: shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemePreference::Light => "🌙",
            ThemePreference::Dark => "☀",
        }
    }
}

/// Saved value wins; otherwise follow the system scheme, defaulting to light
/// when the platform does not report one.
pub fn load_theme<S>(store: Option<&S>, system: Option<egui::Theme>) -> ThemePreference
where
    S: PreferenceStore + ?Sized,
{
    let saved = store
        .and_then(|store| store.get_preference(THEME_STORAGE_KEY))
        .and_then(|value| ThemePreference::parse(&value));
    saved.unwrap_or(match system {
        Some(egui::Theme::Dark) => ThemePreference::Dark,
        _ => ThemePreference::Light,
    })
}

pub fn save_theme<S>(store: &mut S, theme: ThemePreference)
where
    S: PreferenceStore + ?Sized,
{
    store.set_preference(THEME_STORAGE_KEY, theme.as_str());
}

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(14, 165, 233);
pub const POSITIVE: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);
pub const NEGATIVE: egui::Color32 = egui::Color32::from_rgb(244, 63, 94);
pub const NEUTRAL: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);

pub fn visuals_for_theme(theme: ThemePreference) -> egui::Visuals {
    let mut visuals = match theme {
        ThemePreference::Dark => {
            let mut v = egui::Visuals::dark();
            v.window_fill = egui::Color32::from_rgb(15, 23, 42);
            v.panel_fill = egui::Color32::from_rgb(2, 6, 23);
            v.extreme_bg_color = egui::Color32::from_rgb(15, 23, 42);
            v
        }
        ThemePreference::Light => {
            let mut v = egui::Visuals::light();
            v.window_fill = egui::Color32::WHITE;
            v.panel_fill = egui::Color32::from_rgb(248, 250, 252);
            v.extreme_bg_color = egui::Color32::from_rgb(241, 245, 249);
            v
        }
    };

    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals
}

#[cfg(test)]
mod tests {
    use super::{load_theme, save_theme, PreferenceStore, ThemePreference, THEME_STORAGE_KEY};
    use eframe::egui;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryPreferences(HashMap<String, String>);

    impl PreferenceStore for MemoryPreferences {
        fn get_preference(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_preference(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn saved_preference_wins_over_system_scheme() {
        let mut store = MemoryPreferences::default();
        save_theme(&mut store, ThemePreference::Light);
        assert_eq!(store.0.get(THEME_STORAGE_KEY).map(String::as_str), Some("light"));
        assert_eq!(
            load_theme(Some(&store), Some(egui::Theme::Dark)),
            ThemePreference::Light
        );
    }

    #[test]
    fn falls_back_to_system_scheme_when_unset() {
        let store = MemoryPreferences::default();
        assert_eq!(
            load_theme(Some(&store), Some(egui::Theme::Dark)),
            ThemePreference::Dark
        );
        assert_eq!(
            load_theme::<MemoryPreferences>(None, Some(egui::Theme::Light)),
            ThemePreference::Light
        );
        assert_eq!(
            load_theme::<MemoryPreferences>(None, None),
            ThemePreference::Light
        );
    }

    #[test]
    fn unrecognized_saved_value_is_ignored() {
        let mut store = MemoryPreferences::default();
        store.set_preference(THEME_STORAGE_KEY, "sepia");
        assert_eq!(
            load_theme(Some(&store), Some(egui::Theme::Dark)),
            ThemePreference::Dark
        );
    }

    #[derive(Default)]
    struct RecordingStorage {
        values: HashMap<String, String>,
        flushes: usize,
    }

    impl eframe::Storage for RecordingStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_string(), value);
        }

        fn flush(&mut self) {
            self.flushes += 1;
        }
    }

    #[test]
    fn persists_through_eframe_storage() {
        let mut backing = RecordingStorage::default();
        {
            let storage: &mut dyn eframe::Storage = &mut backing;
            save_theme(storage, ThemePreference::Dark);
        }
        assert_eq!(
            backing.values.get(THEME_STORAGE_KEY).map(String::as_str),
            Some("dark")
        );

        let storage: &dyn eframe::Storage = &backing;
        assert_eq!(
            load_theme(Some(storage), Some(egui::Theme::Light)),
            ThemePreference::Dark
        );
    }

    #[test]
    fn empty_eframe_storage_follows_system_scheme() {
        let backing = RecordingStorage::default();
        let storage: &dyn eframe::Storage = &backing;
        assert_eq!(
            load_theme(Some(storage), Some(egui::Theme::Dark)),
            ThemePreference::Dark
        );
        assert_eq!(backing.flushes, 0);
    }

    #[test]
    fn toggling_round_trips() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
    }
}
