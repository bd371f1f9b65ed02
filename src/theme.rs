use leptos::{create_effect, create_rw_signal, on_cleanup, RwSignal, SignalGet, SignalGetUntracked, SignalSet, SignalUpdate};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::constants::THEME_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}

/// A stored choice wins over the system preference
#[must_use]
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    stored
        .and_then(Theme::parse)
        .unwrap_or(Theme::from_dark(prefers_dark))
}

/// Theme state shared through context
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Flip the theme and remember the user's choice
    pub fn toggle(self) {
        self.theme.update(|theme| *theme = theme.toggled());
        store_theme(self.theme.get_untracked());
    }
}

fn stored_theme() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(THEME_STORAGE_KEY).ok()?
}

fn store_theme(theme: Theme) {
    let Some(window) = web_sys::window() else { return };
    let Ok(Some(storage)) = window.local_storage() else { return };

    if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
        leptos::logging::warn!("Failed to persist {} theme", theme.as_str());
    }
}

fn apply_theme_class(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        leptos::logging::warn!("Failed to get document element");
        return;
    };

    let classes = root.class_list();
    let result = match theme {
        Theme::Dark => classes.add_1("dark"),
        Theme::Light => classes.remove_1("dark"),
    };
    if result.is_err() {
        leptos::logging::warn!("Failed to apply {} theme", theme.as_str());
    }
}

/// Create the theme signal, keep `<html class="dark">` in sync, and follow
/// the system preference until the user picks a theme explicitly
#[must_use]
pub fn use_theme() -> ThemeContext {
    let media_query = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten());
    let prefers_dark = media_query.as_ref().is_some_and(web_sys::MediaQueryList::matches);

    let theme = create_rw_signal(resolve_theme(stored_theme().as_deref(), prefers_dark));

    create_effect(move |_| apply_theme_class(theme.get()));

    if let Some(media_query) = media_query {
        let closure = Closure::wrap(Box::new(move |event: wasm_bindgen::JsValue| {
            if stored_theme().is_some() {
                return;
            }
            let Ok(matches) = js_sys::Reflect::get(&event, &"matches".into()) else { return };
            let Some(is_dark) = matches.as_bool() else { return };
            theme.set(Theme::from_dark(is_dark));
        }) as Box<dyn FnMut(_)>);

        if media_query
            .add_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()))
            .is_err()
        {
            leptos::logging::warn!("Failed to listen for color scheme changes");
        }

        on_cleanup(move || {
            let _ = media_query.remove_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        });
    }

    ThemeContext { theme }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_stored_choice_wins() {
        assert_eq!(resolve_theme(Some("light"), true), Theme::Light);
        assert_eq!(resolve_theme(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn test_system_preference_when_unset_or_invalid() {
        assert_eq!(resolve_theme(None, true), Theme::Dark);
        assert_eq!(resolve_theme(Some("sepia"), false), Theme::Light);
    }
}
