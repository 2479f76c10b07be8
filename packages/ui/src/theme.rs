//! Light/dark theme: a two-state reducer and the capability object that drives it.
//!
//! There is no theme context. [`ThemeController`] is created once at the root
//! with [`use_theme_controller`] and handed to whichever components need it
//! through their props.

use dioxus::prelude::*;

/// Visual theme of the application. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The two theme transitions. Both are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    SelectLight,
    SelectDark,
}

impl Theme {
    /// Next state after `action`.
    pub fn apply(self, action: ThemeAction) -> Theme {
        match action {
            ThemeAction::SelectLight => Theme::Light,
            ThemeAction::SelectDark => Theme::Dark,
        }
    }

    /// CSS background colour of the application root.
    pub fn background(self) -> &'static str {
        match self {
            Theme::Light => "white",
            Theme::Dark => "grey",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Handle to the current theme that can switch it.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeController {
    state: Signal<Theme>,
}

impl ThemeController {
    pub fn new(state: Signal<Theme>) -> Self {
        Self { state }
    }

    pub fn theme(&self) -> Theme {
        *self.state.read()
    }

    pub fn dispatch(&mut self, action: ThemeAction) {
        let next = self.theme().apply(action);
        if next != self.theme() {
            tracing::debug!(theme = next.name(), "theme changed");
        }
        self.state.set(next);
    }

    pub fn select_light(&mut self) {
        self.dispatch(ThemeAction::SelectLight);
    }

    pub fn select_dark(&mut self) {
        self.dispatch(ThemeAction::SelectDark);
    }
}

/// Create the application's theme state, starting at [`Theme::Light`].
pub fn use_theme_controller() -> ThemeController {
    ThemeController::new(use_signal(Theme::default))
}

/// Root wrapper painted with the current theme's background.
#[component]
pub fn Themed(controller: ThemeController, children: Element) -> Element {
    let theme = controller.theme();

    rsx! {
        div {
            class: "themed themed--{theme.name()}",
            style: "background: {theme.background()}",
            {children}
        }
    }
}

/// "Light" / "Dark" buttons.
#[component]
pub fn ThemeButtons(controller: ThemeController) -> Element {
    let mut controller = controller;

    rsx! {
        div {
            class: "theme-buttons",
            button {
                r#type: "button",
                onclick: move |_| controller.select_light(),
                "Light"
            }
            button {
                r#type: "button",
                onclick: move |_| controller.select_dark(),
                "Dark"
            }
        }
    }
}
