//! Notes window backed by the host session and notes services.

use leptos::*;
use platform_host::{NoteDraft, NoteRecord};

use crate::components::use_desktop_runtime;

const STATUS_AUTH_REQUIRED: &str = "Authentication required";
const STATUS_LOADING: &str = "Loading notes...";
const STATUS_SYNCED: &str = "Notes synced";
const STATUS_SAVING: &str = "Saving...";
const STATUS_DELETING: &str = "Deleting...";
const STATUS_NO_SELECTION: &str = "Select a note first";

/// Title shown in the note list for notes saved without one.
pub(crate) fn display_title(title: &str) -> &str {
    let title = title.trim();
    if title.is_empty() {
        "Untitled note"
    } else {
        title
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NotesEditor {
    notes: Vec<NoteRecord>,
    selected: Option<String>,
    draft: NoteDraft,
}

impl NotesEditor {
    fn start_new(&mut self) {
        self.selected = None;
        self.draft = NoteDraft::default();
    }

    fn select(&mut self, note_id: &str) {
        if let Some(note) = self.notes.iter().find(|note| note.id == note_id) {
            self.selected = Some(note.id.clone());
            self.draft = NoteDraft {
                title: note.title.clone(),
                body: note.body.clone(),
            };
        }
    }

    fn replace_notes(&mut self, notes: Vec<NoteRecord>) {
        self.notes = notes;
        let still_listed = self
            .selected
            .as_ref()
            .is_some_and(|id| self.notes.iter().any(|note| &note.id == id));
        if !still_listed {
            self.selected = None;
        }
    }

    /// Saved records move to the top of the list and become the selection.
    fn upsert(&mut self, record: NoteRecord) {
        self.notes.retain(|note| note.id != record.id);
        self.selected = Some(record.id.clone());
        self.notes.insert(0, record);
    }

    fn remove(&mut self, note_id: &str) {
        self.notes.retain(|note| note.id != note_id);
        if self.selected.as_deref() == Some(note_id) {
            self.start_new();
        }
    }
}

#[component]
pub(super) fn NotesApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let host = runtime.host;
    let editor = create_rw_signal(NotesEditor::default());
    let status = create_rw_signal(String::new());

    let refresh = move || {
        let host = host.get_value();
        let Some(session) = host.session_service().current_session() else {
            status.set(STATUS_AUTH_REQUIRED.to_string());
            return;
        };
        status.set(STATUS_LOADING.to_string());
        let notes = host.notes_service();
        spawn_local(async move {
            match notes.list_notes(&session).await {
                Ok(list) => {
                    editor.update(|editor| editor.replace_notes(list));
                    status.set(STATUS_SYNCED.to_string());
                }
                Err(err) => {
                    logging::warn!("notes list failed: {err}");
                    status.set(format!("Load failed: {err}"));
                }
            }
        });
    };

    let save = move || {
        let host = host.get_value();
        let Some(session) = host.session_service().current_session() else {
            status.set(STATUS_AUTH_REQUIRED.to_string());
            return;
        };
        let (selected, draft) =
            editor.with_untracked(|editor| (editor.selected.clone(), editor.draft.clone()));
        status.set(STATUS_SAVING.to_string());
        let notes = host.notes_service();
        spawn_local(async move {
            let result = match selected.as_deref() {
                Some(note_id) => notes.update_note(&session, note_id, draft).await,
                None => notes.create_note(&session, draft).await,
            };
            match result {
                Ok(record) => {
                    editor.update(|editor| editor.upsert(record));
                    refresh();
                }
                Err(err) => {
                    logging::warn!("notes save failed: {err}");
                    status.set(format!("Save failed: {err}"));
                }
            }
        });
    };

    let delete = move || {
        let host = host.get_value();
        let Some(session) = host.session_service().current_session() else {
            status.set(STATUS_AUTH_REQUIRED.to_string());
            return;
        };
        let Some(note_id) = editor.with_untracked(|editor| editor.selected.clone()) else {
            status.set(STATUS_NO_SELECTION.to_string());
            return;
        };
        status.set(STATUS_DELETING.to_string());
        let notes = host.notes_service();
        spawn_local(async move {
            match notes.delete_note(&session, &note_id).await {
                Ok(()) => {
                    editor.update(|editor| editor.remove(&note_id));
                    refresh();
                }
                Err(err) => {
                    logging::warn!("notes delete failed: {err}");
                    status.set(format!("Delete failed: {err}"));
                }
            }
        });
    };

    refresh();

    view! {
        <div class="app-panel app-notes">
            <div class="app-toolbar" role="toolbar" aria-label="Notes actions">
                <button
                    type="button"
                    class="menu-button"
                    on:click=move |_| editor.update(NotesEditor::start_new)
                >
                    "New"
                </button>
                <button type="button" class="menu-button" on:click=move |_| save()>
                    "Save"
                </button>
                <button type="button" class="menu-button" on:click=move |_| delete()>
                    "Delete"
                </button>
                <button type="button" class="menu-button" on:click=move |_| refresh()>
                    "Refresh"
                </button>
            </div>
            <div class="notes-layout">
                <ul class="notes-list" role="listbox" aria-label="Notes">
                    {move || {
                        editor
                            .with(|editor| editor.notes.clone())
                            .into_iter()
                            .map(|note| {
                                let id = note.id.clone();
                                let selected_id = id.clone();
                                view! {
                                    <li
                                        class="notes-list-item"
                                        role="option"
                                        aria-selected=move || {
                                            editor
                                                .with(|editor| {
                                                    editor.selected.as_deref() == Some(selected_id.as_str())
                                                })
                                        }
                                        on:click=move |_| editor.update(|editor| editor.select(&id))
                                    >
                                        {display_title(&note.title).to_string()}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <div class="notes-editor">
                    <input
                        type="text"
                        class="notes-title"
                        placeholder="Title"
                        prop:value=move || editor.with(|editor| editor.draft.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            editor.update(|editor| editor.draft.title = value);
                        }
                    />
                    <textarea
                        class="notes-body"
                        aria-label="Note body"
                        prop:value=move || editor.with(|editor| editor.draft.body.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            editor.update(|editor| editor.draft.body = value);
                        }
                    ></textarea>
                </div>
            </div>
            <div class="app-statusbar" role="status" aria-live="polite">
                {move || status.get()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{AuthSession, MemoryNotesService, NotesService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn note(id: &str, title: &str, updated_at_ms: u64) -> NoteRecord {
        NoteRecord {
            id: id.to_string(),
            user_id: "guest".to_string(),
            title: title.to_string(),
            body: format!("{title} body"),
            updated_at_ms,
        }
    }

    #[test]
    fn blank_titles_display_as_untitled() {
        assert_eq!(display_title("   "), "Untitled note");
        assert_eq!(display_title(" Groceries "), "Groceries");
    }

    #[test]
    fn selecting_a_note_loads_its_draft() {
        let mut editor = NotesEditor::default();
        editor.replace_notes(vec![note("note-1", "Todo", 1), note("note-2", "Ideas", 2)]);
        editor.select("note-2");

        assert_eq!(editor.selected.as_deref(), Some("note-2"));
        assert_eq!(editor.draft.title, "Ideas");
        assert_eq!(editor.draft.body, "Ideas body");

        editor.select("missing");
        assert_eq!(editor.selected.as_deref(), Some("note-2"));
    }

    #[test]
    fn saved_notes_move_to_the_top_and_stay_selected() {
        let mut editor = NotesEditor::default();
        editor.replace_notes(vec![note("note-1", "Todo", 1), note("note-2", "Ideas", 2)]);
        editor.upsert(note("note-2", "Ideas v2", 3));

        let ids: Vec<&str> = editor.notes.iter().map(|note| note.id.as_str()).collect();
        assert_eq!(ids, vec!["note-2", "note-1"]);
        assert_eq!(editor.selected.as_deref(), Some("note-2"));
    }

    #[test]
    fn removing_the_selected_note_resets_the_draft() {
        let mut editor = NotesEditor::default();
        editor.replace_notes(vec![note("note-1", "Todo", 1)]);
        editor.select("note-1");
        editor.remove("note-1");

        assert_eq!(editor, NotesEditor::default());
    }

    #[test]
    fn reloading_after_a_save_mirrors_the_service_and_keeps_the_selection() {
        let session = AuthSession {
            user_id: "guest".to_string(),
            access_token: "token".to_string(),
        };
        let service = MemoryNotesService::default();
        let draft = |title: &str| NoteDraft {
            title: title.to_string(),
            body: String::new(),
        };
        block_on(service.create_note(&session, draft("Todo"))).expect("create");

        let mut editor = NotesEditor::default();
        editor.replace_notes(block_on(service.list_notes(&session)).expect("list"));
        let saved = block_on(service.create_note(&session, draft("Ideas"))).expect("create");
        editor.upsert(saved.clone());
        let listed = block_on(service.list_notes(&session)).expect("list");
        editor.replace_notes(listed.clone());

        assert_eq!(editor.notes, listed);
        assert_eq!(editor.selected, Some(saved.id));

        block_on(service.delete_note(&session, "note-1")).expect("delete");
        editor.replace_notes(block_on(service.list_notes(&session)).expect("list"));
        assert_eq!(editor.notes.len(), 1);
    }

    #[test]
    fn refreshed_lists_drop_stale_selections() {
        let mut editor = NotesEditor::default();
        editor.replace_notes(vec![note("note-1", "Todo", 1)]);
        editor.select("note-1");
        editor.replace_notes(vec![note("note-3", "Other", 4)]);

        assert_eq!(editor.selected, None);
    }
}
