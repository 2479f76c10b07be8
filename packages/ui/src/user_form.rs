use api::NewUser;
use dioxus::prelude::*;

/// Controlled form for a new user: name, email, bio.
///
/// Values are passed through untouched; the fields keep their contents after
/// submitting.
#[component]
pub fn UserForm(on_submit: EventHandler<NewUser>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut bio = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(NewUser::new(name(), email(), bio()));
    };

    rsx! {
        form {
            class: "user-form",
            onsubmit: handle_submit,

            label {
                r#for: "name",
                "Name "
                input {
                    id: "name",
                    name: "name",
                    r#type: "text",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            br {}
            label {
                r#for: "email",
                "Email "
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            br {}
            label {
                r#for: "bio",
                "Bio "
                textarea {
                    id: "bio",
                    name: "bio",
                    value: bio(),
                    oninput: move |evt: FormEvent| bio.set(evt.value()),
                }
            }
            br {}
            button { r#type: "submit", "Submit" }
        }
    }
}
