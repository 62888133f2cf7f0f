//! Theme resolution, application, and persistence.
//!
//! DESIGN
//! ======
//! The document attribute and the persisted flag are the only cross-component
//! state in the crate. `ThemeController` owns both mutations behind a
//! `ThemePreferences` trait so the resolution rules (stored value beats OS
//! preference, OS changes stop mattering once the user has chosen) are
//! testable natively; the browser implementation lives in
//! `components::theme_toggle`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Binary display theme, applied site-wide through the `data-theme`
/// attribute on the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Token used for both the document attribute and the persisted flag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted token. Unknown values read as no preference.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme matching an OS-reported color scheme.
    #[must_use]
    pub fn for_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Host access needed to resolve and maintain the theme: one persisted
/// slot, the OS color-scheme preference, and the live document attribute.
pub trait ThemePreferences {
    /// Previously persisted preference, if the user has made an explicit
    /// choice.
    fn stored(&self) -> Option<Theme>;

    /// Persist an explicit preference.
    fn store(&self, theme: Theme);

    /// Whether the OS currently reports a dark color scheme.
    fn system_prefers_dark(&self) -> bool;

    /// Apply `theme` to the live document.
    fn apply(&self, theme: Theme);
}

/// Single owner of the active theme.
///
/// Created once at startup; every mutation goes through [`set`](Self::set),
/// [`toggle`](Self::toggle), or [`on_system_change`](Self::on_system_change).
pub struct ThemeController<P> {
    prefs: P,
    current: Theme,
}

impl<P: ThemePreferences> ThemeController<P> {
    /// Resolve the startup theme (stored preference, else OS preference)
    /// and apply it. Resolution does not persist anything.
    #[must_use]
    pub fn init(prefs: P) -> Self {
        let current = prefs
            .stored()
            .unwrap_or_else(|| Theme::for_system(prefs.system_prefers_dark()));
        prefs.apply(current);
        Self { prefs, current }
    }

    /// The currently applied theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Apply an explicit choice and persist it immediately.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.prefs.apply(theme);
        self.prefs.store(theme);
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) {
        self.set(self.current.toggled());
    }

    /// Follow an OS-level color-scheme change.
    ///
    /// Ignored once an explicit preference has been persisted. Following a
    /// change applies without persisting, so OS changes keep being honored
    /// until the user chooses.
    pub fn on_system_change(&mut self, prefers_dark: bool) {
        if self.prefs.stored().is_some() {
            return;
        }
        let theme = Theme::for_system(prefers_dark);
        self.current = theme;
        self.prefs.apply(theme);
    }
}
