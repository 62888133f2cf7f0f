use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[derive(Default)]
struct Cells {
    stored: RefCell<Option<Theme>>,
    applied: RefCell<Option<Theme>>,
    prefers_dark: RefCell<bool>,
}

/// Recording host double; clones share the same cells so the test can
/// inspect state after the controller takes ownership of its copy.
#[derive(Clone, Default)]
struct FakeHost(Rc<Cells>);

impl FakeHost {
    fn with_stored(theme: Theme) -> Self {
        let host = Self::default();
        *host.0.stored.borrow_mut() = Some(theme);
        host
    }

    fn with_system_dark() -> Self {
        let host = Self::default();
        *host.0.prefers_dark.borrow_mut() = true;
        host
    }

    fn applied(&self) -> Option<Theme> {
        *self.0.applied.borrow()
    }

    fn stored_value(&self) -> Option<Theme> {
        *self.0.stored.borrow()
    }
}

impl ThemePreferences for FakeHost {
    fn stored(&self) -> Option<Theme> {
        *self.0.stored.borrow()
    }

    fn store(&self, theme: Theme) {
        *self.0.stored.borrow_mut() = Some(theme);
    }

    fn system_prefers_dark(&self) -> bool {
        *self.0.prefers_dark.borrow()
    }

    fn apply(&self, theme: Theme) {
        *self.0.applied.borrow_mut() = Some(theme);
    }
}

#[test]
fn tokens_round_trip() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_tokens() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("solarized"), None);
}

#[test]
fn toggled_flips_between_the_two_themes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn init_prefers_the_stored_value() {
    let host = FakeHost::with_stored(Theme::Dark);
    let controller = ThemeController::init(host.clone());
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(host.applied(), Some(Theme::Dark));
}

#[test]
fn init_falls_back_to_os_preference() {
    let host = FakeHost::with_system_dark();
    let controller = ThemeController::init(host.clone());
    assert_eq!(controller.current(), Theme::Dark);

    let host = FakeHost::default();
    let controller = ThemeController::init(host.clone());
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn init_applies_without_persisting() {
    let host = FakeHost::with_system_dark();
    let _controller = ThemeController::init(host.clone());
    assert_eq!(host.applied(), Some(Theme::Dark));
    assert_eq!(host.stored_value(), None);
}

#[test]
fn set_applies_and_persists() {
    for theme in [Theme::Light, Theme::Dark] {
        let host = FakeHost::default();
        let mut controller = ThemeController::init(host.clone());
        controller.set(theme);
        assert_eq!(controller.current(), theme);
        assert_eq!(host.applied(), Some(theme));
        assert_eq!(host.stored_value(), Some(theme));
    }
}

#[test]
fn set_twice_matches_set_once() {
    let host = FakeHost::default();
    let mut controller = ThemeController::init(host.clone());
    controller.set(Theme::Dark);
    let once = (controller.current(), host.applied(), host.stored_value());
    controller.set(Theme::Dark);
    assert_eq!((controller.current(), host.applied(), host.stored_value()), once);
}

#[test]
fn toggle_twice_restores_the_original_theme() {
    let host = FakeHost::with_stored(Theme::Dark);
    let mut controller = ThemeController::init(host.clone());
    controller.toggle();
    assert_eq!(controller.current(), Theme::Light);
    controller.toggle();
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(host.applied(), Some(Theme::Dark));
}

#[test]
fn os_change_followed_while_no_explicit_choice() {
    let host = FakeHost::default();
    let mut controller = ThemeController::init(host.clone());
    controller.on_system_change(true);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(host.applied(), Some(Theme::Dark));
    // Following the OS never counts as a user choice.
    assert_eq!(host.stored_value(), None);
}

#[test]
fn os_changes_keep_applying_until_a_choice_is_made() {
    let host = FakeHost::default();
    let mut controller = ThemeController::init(host.clone());
    controller.on_system_change(true);
    controller.on_system_change(false);
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(host.applied(), Some(Theme::Light));
}

#[test]
fn os_change_ignored_after_explicit_choice() {
    let host = FakeHost::default();
    let mut controller = ThemeController::init(host.clone());
    controller.set(Theme::Light);
    controller.on_system_change(true);
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(host.applied(), Some(Theme::Light));
    assert_eq!(host.stored_value(), Some(Theme::Light));
}

#[test]
fn os_change_ignored_with_preexisting_stored_preference() {
    let host = FakeHost::with_stored(Theme::Light);
    let mut controller = ThemeController::init(host.clone());
    controller.on_system_change(true);
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(host.applied(), Some(Theme::Light));
}
