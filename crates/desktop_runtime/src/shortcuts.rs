//! Desktop shortcut records and the stock icon set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{AppKind, Point, Rect, Size};

/// Identity of the pinned Recycle Bin shortcut.
pub const RECYCLE_BIN_ID: &str = "recycle";
/// Tint used for folders.
pub const FOLDER_COLOR: &str = "#f2d28c";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ShortcutId(pub String);

impl ShortcutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_recycle_bin(&self) -> bool {
        self.0 == RECYCLE_BIN_ID
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What activating a shortcut does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenAction {
    Launch(AppKind),
    OpenFolder(ShortcutId),
}

/// Where a shortcut currently lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    Desktop { position: Point },
    Folder { folder: ShortcutId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: ShortcutId,
    pub label: String,
    pub color: String,
    /// Glyph drawn for the icon.
    pub variant: AppKind,
    pub removable: bool,
    pub action: OpenAction,
    pub placement: Placement,
}

impl Shortcut {
    /// Builds a removable shortcut that launches `kind` from `position`.
    pub fn launcher(
        id: &str,
        label: &str,
        color: &str,
        kind: AppKind,
        position: Point,
    ) -> Self {
        Self {
            id: ShortcutId::new(id),
            label: label.to_string(),
            color: color.to_string(),
            variant: kind,
            removable: true,
            action: OpenAction::Launch(kind),
            placement: Placement::Desktop { position },
        }
    }

    /// Builds an empty folder shortcut at `position`.
    pub fn folder(id: ShortcutId, label: String, position: Point) -> Self {
        Self {
            action: OpenAction::OpenFolder(id.clone()),
            id,
            label,
            color: FOLDER_COLOR.to_string(),
            variant: AppKind::Folder,
            removable: true,
            placement: Placement::Desktop { position },
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.action, OpenAction::OpenFolder(_))
    }

    /// Desktop position, or `None` while filed in a folder.
    pub fn position(&self) -> Option<Point> {
        match self.placement {
            Placement::Desktop { position } => Some(position),
            Placement::Folder { .. } => None,
        }
    }

    pub fn footprint(&self, size: Size) -> Option<Rect> {
        self.position().map(|position| Rect::at(position, size))
    }

    /// Whether the shortcut may be recycled or filed into a folder.
    pub fn is_movable(&self) -> bool {
        self.removable && !self.id.is_recycle_bin()
    }
}

/// The Recycle Bin shortcut. It is rendered in a fixed slot and never joins the free-form set.
pub fn recycle_bin_shortcut() -> Shortcut {
    Shortcut {
        id: ShortcutId::new(RECYCLE_BIN_ID),
        label: "Recycle Bin".to_string(),
        color: "#f0f0f0".to_string(),
        variant: AppKind::Recycle,
        removable: false,
        action: OpenAction::Launch(AppKind::Recycle),
        placement: Placement::Desktop {
            position: Point::default(),
        },
    }
}

/// Stock icon column shown on a fresh desktop.
pub fn default_desktop_shortcuts() -> Vec<Shortcut> {
    [
        ("files", "My Files", "#8cc6ff", AppKind::Files),
        ("computer", "My Computer", "#cde6ff", AppKind::Computer),
        ("notepad", "Notepad", "#f2d28c", AppKind::Notepad),
        ("paint", "Paint", "#c9e5ff", AppKind::Paint),
        ("minesweeper", "Minesweeper", "#c6f6c6", AppKind::Minesweeper),
        ("settings", "Settings", "#e0e0e0", AppKind::Settings),
        ("about", "About RetroOS", "#d0c0ff", AppKind::About),
    ]
    .into_iter()
    .enumerate()
    .map(|(row, (id, label, color, kind))| {
        Shortcut::launcher(id, label, color, kind, Point::new(12, 12 + 98 * row as i32))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stock_icons_form_a_single_column() {
        let icons = default_desktop_shortcuts();
        assert_eq!(icons.len(), 7);
        assert_eq!(icons[0].position(), Some(Point::new(12, 12)));
        assert_eq!(icons[6].position(), Some(Point::new(12, 600)));
        assert!(icons.iter().all(Shortcut::is_movable));
    }

    #[test]
    fn recycle_bin_is_pinned() {
        let bin = recycle_bin_shortcut();
        assert!(!bin.is_movable());
        assert_eq!(bin.action, OpenAction::Launch(AppKind::Recycle));
    }

    #[test]
    fn folder_shortcut_opens_itself() {
        let folder = Shortcut::folder(
            ShortcutId::new("folder-1"),
            "New Folder 1".to_string(),
            Point::new(140, 140),
        );
        assert!(folder.is_folder());
        assert_eq!(
            folder.action,
            OpenAction::OpenFolder(ShortcutId::new("folder-1"))
        );
    }
}
