use dioxus::prelude::*;

use ui::{Navbar, NoteCard, NotesPage};

use super::make_client;
use crate::Route;

/// The notes page: create form, live list, logout.
///
/// Handlers clone the page state, run the operation, and set the result
/// back; overlapping operations are last-write-wins, with no sequencing
/// token or cancellation.
#[component]
pub fn Home() -> Element {
    let mut page = use_signal(NotesPage::default);
    let nav = use_navigator();

    // Initial fetch on mount. Starts from a fresh default: reading `page`
    // inside the resource would subscribe it to the signal it writes.
    let _loader = use_resource(move || async move {
        let mut state = NotesPage::default();
        state.load(&make_client()).await;
        page.set(state);
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let mut state = page();
            state.submit(&make_client()).await;
            page.set(state);
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            let mut state = page();
            state.delete(&make_client(), id).await;
            page.set(state);
        });
    };

    rsx! {
        div {
            class: "home-container",

            Navbar {
                h1 { "My Notes" }
                button {
                    class: "logout-btn",
                    onclick: move |_| { nav.push(Route::Logout {}); },
                    "Logout"
                }
            }

            main {
                class: "home-main",

                section {
                    class: "create-note-section",
                    h2 { "Create a Note" }
                    form {
                        class: "note-form",
                        onsubmit: handle_create,

                        div {
                            class: "form-group",
                            label { r#for: "title", "Title" }
                            input {
                                id: "title",
                                name: "title",
                                r#type: "text",
                                placeholder: "Enter note title...",
                                required: true,
                                value: "{page().title}",
                                oninput: move |evt| page.write().title = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "content", "Content" }
                            textarea {
                                id: "content",
                                name: "content",
                                placeholder: "Write your note here...",
                                rows: "4",
                                required: true,
                                value: "{page().content}",
                                oninput: move |evt| page.write().content = evt.value(),
                            }
                        }
                        button {
                            class: "submit-btn",
                            r#type: "submit",
                            "Add Note"
                        }
                    }
                }

                section {
                    class: "notes-section",
                    div {
                        class: "notes-header",
                        h2 { "Your Notes" }
                        span { class: "notes-count", "{page().count_label()}" }
                    }

                    if page().loading {
                        div { class: "loading-state", "Loading notes..." }
                    } else if page().is_empty() {
                        div {
                            class: "empty-state",
                            p { "No notes yet. Create your first note above!" }
                        }
                    } else {
                        div {
                            class: "notes-grid",
                            for note in page().notes {
                                NoteCard {
                                    key: "{note.id}",
                                    note: note.clone(),
                                    on_delete: handle_delete,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
