use api::{NewNote, Note, NotesApi};

/// Centralized state for the notes page.
///
/// Owned by the Home view as a `Signal<NotesPage>`. Every mutation is
/// followed by a full reload rather than a local patch, so the list never
/// diverges from the server for longer than one round trip. Failures are
/// logged and swallowed; the only user-visible signal is that the state
/// does not change.
#[derive(Clone, Debug, PartialEq)]
pub struct NotesPage {
    /// Server-ordered cache of the note collection.
    pub notes: Vec<Note>,
    /// Pending form input.
    pub title: String,
    /// Pending form input.
    pub content: String,
    pub loading: bool,
}

impl Default for NotesPage {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            title: String::new(),
            content: String::new(),
            loading: true,
        }
    }
}

impl NotesPage {
    /// Fetch the full note collection, replacing `notes` with the response
    /// in server order. A failed fetch logs and keeps the stale list
    /// visible.
    pub async fn load(&mut self, api: &impl NotesApi) {
        self.loading = true;
        match api.list_notes().await {
            Ok(notes) => self.notes = notes,
            Err(err) => tracing::error!("failed to fetch notes: {err}"),
        }
        self.loading = false;
    }

    /// Submit the pending form. Only a confirmed create clears the inputs
    /// and reloads the list; on any failure both fields keep their text so
    /// the user can retry without retyping.
    pub async fn submit(&mut self, api: &impl NotesApi) {
        let input = NewNote {
            title: self.title.clone(),
            content: self.content.clone(),
        };
        match api.create_note(&input).await {
            Ok(_) => {
                self.title.clear();
                self.content.clear();
                self.load(api).await;
            }
            Err(err) => tracing::error!("failed to create note: {err}"),
        }
    }

    /// Delete one note by id, reloading once the server confirms. A failed
    /// delete logs and leaves the item in place.
    pub async fn delete(&mut self, api: &impl NotesApi, id: i64) {
        match api.delete_note(id).await {
            Ok(()) => self.load(api).await,
            Err(err) => tracing::error!("failed to delete note {id}: {err}"),
        }
    }

    /// Label next to the list heading: "1 note" for exactly one, otherwise
    /// "{n} notes".
    pub fn count_label(&self) -> String {
        match self.notes.len() {
            1 => "1 note".to_string(),
            n => format!("{n} notes"),
        }
    }

    /// The empty-state prompt shows only once a fetch has settled on an
    /// empty list.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.notes.is_empty()
    }
}
