//! This crate contains all shared UI for the workspace: the note card, the
//! page header shell, and the notes-page state the views drive.

mod navbar;
pub use navbar::Navbar;

mod note_card;
pub use note_card::NoteCard;

mod notes_page;
pub use notes_page::NotesPage;
