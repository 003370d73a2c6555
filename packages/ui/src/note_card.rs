use api::Note;
use dioxus::prelude::*;

const NOTE_CARD_CSS: Asset = asset!("/assets/note_card.css");

/// One note in the list: title, content, creation date, delete.
///
/// Purely presentational; persistence stays with the page, which hands in
/// the delete callback.
#[component]
pub fn NoteCard(note: Note, on_delete: EventHandler<i64>) -> Element {
    let id = note.id;

    rsx! {
        document::Stylesheet { href: NOTE_CARD_CSS }

        div {
            class: "note-card",
            div {
                class: "note-card-header",
                h3 { class: "note-card-title", "{note.title}" }
                span { class: "note-card-date", "{note.created_label()}" }
            }
            p { class: "note-card-content", "{note.content}" }
            button {
                class: "note-card-delete",
                onclick: move |_| on_delete.call(id),
                "Delete"
            }
        }
    }
}
