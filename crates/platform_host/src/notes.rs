//! Notes CRUD service contract.
//!
//! This is the REST-shaped surface the notes screen talks to. The shell only consumes the
//! success/failure outcome and the resulting list; transport details belong to the adapter.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::{session::AuthSession, time::unix_time_ms_now};

/// Object-safe boxed future used by [`NotesService`] methods.
pub type NotesFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A stored note.
pub struct NoteRecord {
    /// Backend identity.
    pub id: String,
    /// Owner user id.
    pub user_id: String,
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Last write time in unix milliseconds.
    pub updated_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Fields supplied when creating or updating a note.
pub struct NoteDraft {
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
}

/// Host service for note list/create/update/delete.
pub trait NotesService {
    /// Lists the session owner's notes, most recently updated first.
    fn list_notes<'a>(
        &'a self,
        session: &'a AuthSession,
    ) -> NotesFuture<'a, Result<Vec<NoteRecord>, String>>;

    /// Creates a note and returns the stored record.
    fn create_note<'a>(
        &'a self,
        session: &'a AuthSession,
        draft: NoteDraft,
    ) -> NotesFuture<'a, Result<NoteRecord, String>>;

    /// Replaces the title/body of an existing note.
    fn update_note<'a>(
        &'a self,
        session: &'a AuthSession,
        note_id: &'a str,
        draft: NoteDraft,
    ) -> NotesFuture<'a, Result<NoteRecord, String>>;

    /// Deletes a note by id.
    fn delete_note<'a>(
        &'a self,
        session: &'a AuthSession,
        note_id: &'a str,
    ) -> NotesFuture<'a, Result<(), String>>;
}

#[derive(Debug, Default)]
struct MemoryNotesInner {
    notes: Vec<NoteRecord>,
    next_id: u64,
}

#[derive(Debug, Clone, Default)]
/// In-memory notes backend scoped by user id. Clones share state.
pub struct MemoryNotesService {
    inner: Rc<RefCell<MemoryNotesInner>>,
}

impl NotesService for MemoryNotesService {
    fn list_notes<'a>(
        &'a self,
        session: &'a AuthSession,
    ) -> NotesFuture<'a, Result<Vec<NoteRecord>, String>> {
        Box::pin(async move {
            let mut notes: Vec<NoteRecord> = self
                .inner
                .borrow()
                .notes
                .iter()
                .filter(|note| note.user_id == session.user_id)
                .cloned()
                .collect();
            notes.sort_by(|a, b| b.updated_at_ms.cmp(&a.updated_at_ms));
            Ok(notes)
        })
    }

    fn create_note<'a>(
        &'a self,
        session: &'a AuthSession,
        draft: NoteDraft,
    ) -> NotesFuture<'a, Result<NoteRecord, String>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let record = NoteRecord {
                id: format!("note-{}", inner.next_id),
                user_id: session.user_id.clone(),
                title: draft.title,
                body: draft.body,
                updated_at_ms: unix_time_ms_now(),
            };
            inner.notes.push(record.clone());
            Ok(record)
        })
    }

    fn update_note<'a>(
        &'a self,
        session: &'a AuthSession,
        note_id: &'a str,
        draft: NoteDraft,
    ) -> NotesFuture<'a, Result<NoteRecord, String>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            let note = inner
                .notes
                .iter_mut()
                .find(|note| note.id == note_id && note.user_id == session.user_id)
                .ok_or_else(|| format!("note {note_id} not found"))?;
            note.title = draft.title;
            note.body = draft.body;
            note.updated_at_ms = unix_time_ms_now();
            Ok(note.clone())
        })
    }

    fn delete_note<'a>(
        &'a self,
        session: &'a AuthSession,
        note_id: &'a str,
    ) -> NotesFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            let before = inner.notes.len();
            inner
                .notes
                .retain(|note| !(note.id == note_id && note.user_id == session.user_id));
            if inner.notes.len() == before {
                return Err(format!("note {note_id} not found"));
            }
            Ok(())
        })
    }
}
