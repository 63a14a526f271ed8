use dioxus::prelude::*;
use tracing::{debug, info, warn};
use types::{Modal, Role, Status, Submitted, UserDirectory};
use ui::{ModalFrame, icons};

#[component]
pub fn Users() -> Element {
    let mut directory = use_signal(UserDirectory::seeded);
    use_hook(|| debug!("user management mounted"));

    let dir = directory.read();
    let search = dir.search_text().to_string();
    let rows: Vec<_> = dir.visible().into_iter().cloned().collect();
    let modal_open = dir.is_modal_open();
    drop(dir);

    rsx! {
        div { class: "page",
            div { class: "page-header",
                h1 { class: "page-title", "User Management" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| directory.write().begin_create(),
                    icons::Plus {}
                    "Add User"
                }
            }

            div { class: "search-box",
                span { class: "search-icon", icons::Search {} }
                input {
                    class: "form-input search-input",
                    r#type: "text",
                    placeholder: "Search users...",
                    value: "{search}",
                    oninput: move |e| directory.write().set_search(e.value()),
                }
            }

            div { class: "card",
                div { class: "table-container",
                    table {
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                                th { "Status" }
                                th { class: "text-right", "Actions" }
                            }
                        }
                        tbody {
                            for user in rows {
                                {
                                    let id = user.id;
                                    let badge = match user.status {
                                        Status::Active => "badge badge-success",
                                        Status::Inactive => "badge badge-danger",
                                    };
                                    rsx! {
                                        tr { key: "{id}",
                                            td { "{user.name}" }
                                            td { "{user.email}" }
                                            td { "{user.role}" }
                                            td {
                                                span { class: badge, "{user.status}" }
                                            }
                                            td { class: "text-right",
                                                button {
                                                    class: "icon-btn icon-btn-primary",
                                                    r#type: "button",
                                                    title: "Edit",
                                                    onclick: move |_| {
                                                        if let Err(err) = directory.write().begin_edit(id) {
                                                            warn!(%id, %err, "cannot edit user");
                                                        }
                                                    },
                                                    icons::Pencil {}
                                                }
                                                button {
                                                    class: "icon-btn icon-btn-danger",
                                                    r#type: "button",
                                                    title: "Delete",
                                                    onclick: move |_| {
                                                        if let Some(removed) = directory.write().delete(id) {
                                                            info!(%id, name = %removed.name, "user deleted");
                                                        }
                                                    },
                                                    icons::Trash {}
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if modal_open {
                UserFormModal { directory }
            }
        }
    }
}

/// Create/edit form bound to the directory's open draft.
#[component]
fn UserFormModal(mut directory: Signal<UserDirectory>) -> Element {
    let mut form_error = use_signal(|| None::<String>);

    let (editing, draft) = match directory.read().modal() {
        Modal::Open { editing, draft } => (*editing, draft.clone()),
        Modal::Closed => return rsx! {},
    };
    let title = if editing.is_some() { "Edit User" } else { "Add New User" };

    rsx! {
        ModalFrame {
            title,
            on_close: move |_| directory.write().cancel(),
            form {
                class: "modal-body",
                onsubmit: move |e: FormEvent| {
                    e.prevent_default();
                    let result = directory.write().submit();
                    match result {
                        Ok(Submitted::Created(id)) => info!(%id, "user created"),
                        Ok(Submitted::Updated(id)) => info!(%id, "user updated"),
                        Err(err) => {
                            warn!(%err, "user form rejected");
                            form_error.set(Some(err.message));
                        }
                    }
                },
                if let Some(err) = form_error.read().as_ref() {
                    div { class: "alert alert-error", "{err}" }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "user-name", "Name" }
                    input {
                        id: "user-name",
                        class: "form-input",
                        r#type: "text",
                        required: true,
                        value: "{draft.name}",
                        oninput: move |e| {
                            if let Some(draft) = directory.write().draft_mut() {
                                draft.name = e.value();
                            }
                        },
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "user-email", "Email" }
                    input {
                        id: "user-email",
                        class: "form-input",
                        r#type: "email",
                        required: true,
                        value: "{draft.email}",
                        oninput: move |e| {
                            if let Some(draft) = directory.write().draft_mut() {
                                draft.email = e.value();
                            }
                        },
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "user-role", "Role" }
                    select {
                        id: "user-role",
                        class: "form-input",
                        value: "{draft.role}",
                        onchange: move |e| match e.value().parse::<Role>() {
                            Ok(role) => {
                                if let Some(draft) = directory.write().draft_mut() {
                                    draft.role = role;
                                }
                            }
                            Err(err) => warn!(%err, "ignoring role selection"),
                        },
                        for role in Role::ALL {
                            option { key: "{role}", value: "{role}", selected: draft.role == role, "{role}" }
                        }
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "user-status", "Status" }
                    select {
                        id: "user-status",
                        class: "form-input",
                        value: "{draft.status}",
                        onchange: move |e| match e.value().parse::<Status>() {
                            Ok(status) => {
                                if let Some(draft) = directory.write().draft_mut() {
                                    draft.status = status;
                                }
                            }
                            Err(err) => warn!(%err, "ignoring status selection"),
                        },
                        for status in Status::ALL {
                            option {
                                key: "{status}",
                                value: "{status}",
                                selected: draft.status == status,
                                "{status.label()}"
                            }
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| directory.write().cancel(),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        if editing.is_some() { "Save Changes" } else { "Add User" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::UserId;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// The opening tag of the element with `id`.
    fn tag_with_id<'a>(html: &'a str, id: &str) -> &'a str {
        let at = html
            .find(&format!("id=\"{id}\""))
            .unwrap_or_else(|| panic!("no element {id}"));
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    #[component]
    fn CreateForm() -> Element {
        let directory = use_signal(|| {
            let mut dir = UserDirectory::seeded();
            dir.begin_create();
            dir
        });
        rsx! { UserFormModal { directory } }
    }

    #[component]
    fn EditForm() -> Element {
        let directory = use_signal(|| {
            let mut dir = UserDirectory::seeded();
            dir.begin_edit(UserId(2)).unwrap();
            dir
        });
        rsx! { UserFormModal { directory } }
    }

    #[test]
    fn browser_blocks_blank_name_and_email() {
        let html = render(CreateForm);

        let name = tag_with_id(&html, "user-name");
        assert!(name.contains("type=\"text\""), "{name}");
        assert!(name.contains("required"), "{name}");

        let email = tag_with_id(&html, "user-email");
        assert!(email.contains("type=\"email\""), "{email}");
        assert!(email.contains("required"), "{email}");

        assert!(html.contains("type=\"submit\""));
        assert!(html.contains("Add New User"));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let html = render(EditForm);

        assert!(html.contains("Edit User"));
        assert!(html.contains("Save Changes"));
        assert!(tag_with_id(&html, "user-name").contains("value=\"Irwan Budi\""));
        assert!(tag_with_id(&html, "user-email").contains("value=\"irwan@example.com\""));
    }

    #[test]
    fn closed_directory_renders_no_form() {
        let html = render(|| {
            let directory = use_signal(UserDirectory::seeded);
            rsx! { UserFormModal { directory } }
        });
        assert!(!html.contains("<form"));
    }

    #[test]
    fn table_lists_seed_rows_with_status_badges() {
        let html = render(Users);

        for name in ["Mas", "Irwan Budi", "Miko Hambalang"] {
            assert!(html.contains(name), "missing {name}");
        }
        assert_eq!(html.matches("badge badge-success").count(), 2);
        assert_eq!(html.matches("badge badge-danger").count(), 1);
        assert!(!html.contains("modal-overlay"));
    }
}
