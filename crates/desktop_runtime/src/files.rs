//! "My Files" shelf: a flat file list with a recycle side for deleted entries.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Folder,
    Text,
    Image,
    Doc,
}

impl FileKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Folder => "Folder",
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Doc => "Doc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileItem {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
}

impl FileItem {
    fn new(id: &str, name: &str, kind: FileKind) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileShelf {
    files: Vec<FileItem>,
    deleted: Vec<FileItem>,
}

impl Default for FileShelf {
    fn default() -> Self {
        Self {
            files: vec![
                FileItem::new("f1", "Projects", FileKind::Folder),
                FileItem::new("f2", "Retro Notes.txt", FileKind::Text),
                FileItem::new("f3", "Screenshots", FileKind::Image),
                FileItem::new("f4", "Minesweeper Scores.dat", FileKind::Doc),
            ],
            deleted: Vec::new(),
        }
    }
}

impl FileShelf {
    pub fn files(&self) -> &[FileItem] {
        &self.files
    }

    pub fn deleted(&self) -> &[FileItem] {
        &self.deleted
    }

    /// Moves a file to the deleted list. Returns `false` for unknown ids.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.files.iter().position(|file| file.id == id) else {
            return false;
        };
        let file = self.files.remove(index);
        self.deleted.push(file);
        true
    }

    /// Puts a deleted file back at the top of the list.
    pub fn restore(&mut self, id: &str) -> bool {
        let Some(index) = self.deleted.iter().position(|file| file.id == id) else {
            return false;
        };
        let file = self.deleted.remove(index);
        self.files.insert(0, file);
        true
    }

    pub fn empty_deleted(&mut self) {
        self.deleted.clear();
    }
}
