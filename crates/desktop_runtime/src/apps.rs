//! Start menu catalog and per-kind window bodies.

mod notes;
mod panels;

use desktop_app_minesweeper::MinesweeperApp;
use leptos::*;

use self::{
    notes::NotesApp,
    panels::{AboutPanel, ComputerPanel, FileManager, FolderView, PaintPanel, RecycleBin, Settings},
};
use crate::{
    model::{AppKind, WindowId},
    reducer::DesktopAction,
    shortcuts::ShortcutId,
};

/// What a start menu entry does when chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartCommand {
    Open(AppKind),
    /// Create a folder and open its window.
    NewFolder,
    CycleWallpaper,
}

impl StartCommand {
    pub fn action(self) -> DesktopAction {
        match self {
            Self::Open(kind) => DesktopAction::OpenApp { kind },
            Self::NewFolder => DesktopAction::NewFolder { open_window: true },
            Self::CycleWallpaper => DesktopAction::CycleWallpaper,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartMenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub command: StartCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartMenuSection {
    pub id: &'static str,
    pub label: &'static str,
    pub items: &'static [StartMenuItem],
}

const fn item(id: &'static str, label: &'static str, command: StartCommand) -> StartMenuItem {
    StartMenuItem { id, label, command }
}

const PROGRAMS: [StartMenuItem; 4] = [
    item("computer", "My Computer", StartCommand::Open(AppKind::Computer)),
    item("notepad", "Notes", StartCommand::Open(AppKind::Notepad)),
    item("paint", "Paint", StartCommand::Open(AppKind::Paint)),
    item("minesweeper", "Minesweeper", StartCommand::Open(AppKind::Minesweeper)),
];

const SYSTEM: [StartMenuItem; 4] = [
    item("files", "My Files", StartCommand::Open(AppKind::Files)),
    item("recycle", "Recycle Bin", StartCommand::Open(AppKind::Recycle)),
    item("settings", "Settings", StartCommand::Open(AppKind::Settings)),
    item("new-folder", "New Folder", StartCommand::NewFolder),
];

const HELP: [StartMenuItem; 2] = [
    item("about", "About RetroOS", StartCommand::Open(AppKind::About)),
    item("wallpaper", "Change wallpaper", StartCommand::CycleWallpaper),
];

const START_MENU: [StartMenuSection; 3] = [
    StartMenuSection {
        id: "programs",
        label: "Programs",
        items: &PROGRAMS,
    },
    StartMenuSection {
        id: "system",
        label: "System",
        items: &SYSTEM,
    },
    StartMenuSection {
        id: "help",
        label: "Help",
        items: &HELP,
    },
];

/// Start menu sections in display order.
pub fn start_menu_sections() -> &'static [StartMenuSection] {
    &START_MENU
}

#[component]
/// Renders the body of a window according to its kind.
pub fn AppBody(
    window_id: WindowId,
    kind: AppKind,
    /// Folder shown by folder windows.
    folder: Option<ShortcutId>,
) -> impl IntoView {
    match kind {
        AppKind::Files => view! { <FileManager /> }.into_view(),
        AppKind::Notepad => view! { <NotesApp /> }.into_view(),
        AppKind::Paint => view! { <PaintPanel /> }.into_view(),
        AppKind::Minesweeper => view! { <MinesweeperApp /> }.into_view(),
        AppKind::About => view! { <AboutPanel window_id=window_id /> }.into_view(),
        AppKind::Recycle => view! { <RecycleBin /> }.into_view(),
        AppKind::Settings => view! { <Settings /> }.into_view(),
        AppKind::Computer => view! { <ComputerPanel /> }.into_view(),
        AppKind::Folder => view! { <FolderView folder=folder /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn start_menu_groups_programs_system_and_help() {
        let labels: Vec<&str> = start_menu_sections().iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Programs", "System", "Help"]);

        let ids: Vec<&str> = start_menu_sections()
            .iter()
            .flat_map(|section| section.items.iter().map(|item| item.id))
            .collect();
        assert_eq!(ids.len(), 10);
        assert!(ids.contains(&"new-folder"));
        assert!(ids.contains(&"wallpaper"));
    }

    #[test]
    fn commands_map_to_reducer_actions() {
        assert_eq!(
            StartCommand::Open(AppKind::Paint).action(),
            DesktopAction::OpenApp {
                kind: AppKind::Paint
            }
        );
        assert_eq!(
            StartCommand::NewFolder.action(),
            DesktopAction::NewFolder { open_window: true }
        );
        assert_eq!(
            StartCommand::CycleWallpaper.action(),
            DesktopAction::CycleWallpaper
        );
    }
}
