//! Read-only rendering of the user list query: loading, error, and records.

use api::{DirectoryError, UserRecord};
use dioxus::prelude::*;

#[component]
pub fn Loader(is_loading: bool) -> Element {
    if !is_loading {
        return rsx! {};
    }

    rsx! {
        div { class: "loader", "Loading..." }
    }
}

/// Generic banner; the error detail goes to the log, not the page.
#[component]
pub fn FetchError(error: Option<DirectoryError>) -> Element {
    if error.is_none() {
        return rsx! {};
    }

    rsx! {
        div { class: "fetch-error", "An error occured fetching the data" }
    }
}

#[component]
pub fn UserList(users: Vec<UserRecord>) -> Element {
    if users.is_empty() {
        return rsx! {};
    }

    rsx! {
        for user in users {
            div {
                key: "{user.id}",
                class: "user-item",
                p { "Name: {user.name}" }
                p { "Email: {user.email}" }
                p { "Bio: {user.bio}" }
                hr {}
            }
        }
    }
}
