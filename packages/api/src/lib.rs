//! # API crate — REST client for the notes backend
//!
//! The backend is an external REST service; this crate is the only thing in
//! the workspace that talks to it. [`ApiClient`] is built from an
//! [`ApiConfig`] (backend origin plus the session's access token) and exposes
//! the note operations behind the [`NotesApi`] trait, so views can be
//! exercised against an in-memory fake in tests.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`, the `NotesApi` trait, exact status contracts |
//! | [`config`] | `ApiConfig`: explicit base URL + credential object |
//! | [`error`] | `ApiError`: transport vs unexpected-status taxonomy |
//! | [`models`] | Wire DTOs: `Note`, `NewNote`, `Credentials`, `TokenPair` |
//! | [`session`] | Stored session tokens (`localStorage` on wasm) |

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use client::{ApiClient, NotesApi};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{Credentials, NewNote, Note, TokenPair};
pub use session::SessionTokens;
