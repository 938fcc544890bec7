//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - browser `File` as a submission candidate
//! - **View Types** - async page state
//! - **Session Types** - shared in-memory hunter session

use std::fmt;

use leptos::*;
use mosquito_core::FileCandidate;
use web_sys::File;

// =============================================================================
// File Types
// =============================================================================

/// A browser `File` picked through an `<input type="file">`.
///
/// Name and MIME type are read once on construction.
#[derive(Clone, Debug)]
pub struct BrowserFile {
    file: File,
    name: String,
    mime_type: String,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self {
            name: file.name(),
            mime_type: file.type_(),
            file,
        }
    }

    /// Underlying DOM file, for `FormData` and `arrayBuffer()`.
    pub fn inner(&self) -> &File {
        &self.file
    }
}

impl FileCandidate for BrowserFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn size_bytes(&self) -> u64 {
        self.file.size() as u64
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

// =============================================================================
// View Types
// =============================================================================

/// State of a page that loads remote data.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(e) => ViewState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

// =============================================================================
// Session Types
// =============================================================================

/// Hunter session, provided as context by the app root.
///
/// Lives only in memory; a reload starts a new session.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    /// Name entered on the landing page.
    pub username: RwSignal<Option<String>>,
    /// Balance from the last profile fetch.
    pub balance: RwSignal<Option<i64>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            username: create_rw_signal(None),
            balance: create_rw_signal(None),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
