use api::{DirectoryError, HttpUserDirectory, NewUser, UserRecord, USERS_KEY};
use dioxus::prelude::*;
use store::QueryState;

use crate::{FetchError, Loader, ThemeButtons, ThemeController, UserForm, UserList};

const DIRECTORY_CSS: Asset = asset!("/assets/styling/directory.css");

pub type UsersState = QueryState<Vec<UserRecord>, DirectoryError>;

/// Form plus user list, kept in sync with the directory service.
///
/// The list is fetched on mount and once more for every invalidation the
/// client publishes (i.e. after each successful submission).
#[component]
pub fn UserDirectoryView(client: HttpUserDirectory, theme: ThemeController) -> Element {
    let mut users = use_signal(UsersState::new);
    let mut refresh = use_signal(|| 0u64);

    // Load on mount and rerun whenever `refresh` is bumped.
    let fetch_client = client.clone();
    let _loader = use_resource(move || {
        let client = fetch_client.clone();
        async move {
            // Reading `refresh` subscribes the resource to it.
            let attempt = refresh();
            let generation = client.cache().generation(&USERS_KEY);
            tracing::debug!(attempt, generation, "loading users");
            users.write().begin_fetch();
            let result = client.list_users().await;
            users.write().settle(result);
        }
    });

    // One refetch per invalidation of the user list.
    let watch_client = client.clone();
    use_future(move || {
        let mut watch = watch_client.watch_users();
        async move {
            while watch.changed().await {
                *refresh.write() += 1;
            }
        }
    });

    let submit_client = client.clone();
    let on_submit = move |user: NewUser| {
        let client = submit_client.clone();
        spawn(async move {
            // Errors are already logged by the client; the form stays as is.
            let _ = client.submit(user).await;
        });
    };

    let state = users();

    rsx! {
        document::Stylesheet { href: DIRECTORY_CSS }

        div {
            class: "user-directory",
            ThemeButtons { controller: theme }
            UserForm { on_submit: on_submit }
            section {
                hr {}
                Loader { is_loading: state.is_loading() }
                FetchError { error: state.error().cloned() }
                UserList { users: state.items().to_vec() }
            }
        }
    }
}
