//! This crate contains all shared UI for the workspace.

pub mod views;
pub use views::{UserDirectoryView, UsersState};

mod theme;
pub use theme::{use_theme_controller, Theme, ThemeAction, ThemeButtons, ThemeController, Themed};

mod user_form;
pub use user_form::UserForm;

mod user_list;
pub use user_list::{FetchError, Loader, UserList};
