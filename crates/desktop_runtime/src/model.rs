use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::{
    config::ShellConfig, desktop::DesktopSpace, files::FileShelf, shortcuts::ShortcutId,
    wallpaper::DEFAULT_WALLPAPER_ID, window_manager::WindowManager,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance, kept integral so threshold checks never round.
    pub fn distance_sq(self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    pub fn clamped_non_negative(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// Axis-aligned rectangle in desktop pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn at(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            w: size.w,
            h: size.h,
        }
    }

    /// Normalized rectangle spanning two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (a.x - b.x).abs(),
            h: (a.y - b.y).abs(),
        }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Edge-inclusive intersection: rectangles that only touch still count.
    pub fn intersects(self, other: Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Strict overlap: touching edges do not overlap.
    pub fn overlaps(self, other: Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Every kind of window the shell can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppKind {
    Files,
    Notepad,
    Paint,
    Minesweeper,
    About,
    Recycle,
    Settings,
    Computer,
    Folder,
}

impl AppKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Files => "My Files",
            Self::Notepad => "Notes",
            Self::Paint => "Retro Paint",
            Self::Minesweeper => "Minesweeper",
            Self::About => "About RetroOS",
            Self::Recycle => "Recycle Bin",
            Self::Settings => "Settings",
            Self::Computer => "My Computer",
            Self::Folder => "Folder",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Files => "files",
            Self::Notepad => "notepad",
            Self::Paint => "paint",
            Self::Minesweeper => "minesweeper",
            Self::About => "about",
            Self::Recycle => "recycle",
            Self::Settings => "settings",
            Self::Computer => "computer",
            Self::Folder => "folder",
        }
    }

    pub fn default_position(self) -> Point {
        match self {
            Self::Files => Point::new(70, 80),
            Self::Notepad => Point::new(140, 90),
            Self::Paint => Point::new(200, 120),
            Self::Minesweeper => Point::new(260, 150),
            Self::About => Point::new(180, 110),
            Self::Recycle => Point::new(320, 130),
            Self::Settings => Point::new(220, 100),
            Self::Computer => Point::new(240, 80),
            Self::Folder => Point::new(240, 120),
        }
    }

    pub fn default_size(self) -> Size {
        match self {
            Self::Files => Size::new(420, 320),
            Self::Notepad => Size::new(520, 520),
            Self::Paint => Size::new(520, 420),
            Self::Minesweeper => Size::new(380, 420),
            Self::About => Size::new(360, 220),
            Self::Recycle => Size::new(420, 320),
            Self::Settings => Size::new(380, 260),
            Self::Computer => Size::new(480, 320),
            Self::Folder => Size::new(420, 320),
        }
    }
}

/// Geometry saved while a window is maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreGeometry {
    pub position: Point,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub kind: AppKind,
    pub title: String,
    pub position: Point,
    pub size: Size,
    pub minimized: bool,
    pub maximized: bool,
    pub z_order: u64,
    pub restore: Option<RestoreGeometry>,
    /// Folder shown by a [`AppKind::Folder`] window.
    pub folder: Option<ShortcutId>,
}

/// Request to open a window; unset fields fall back to the kind's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub kind: AppKind,
    pub title: Option<String>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub folder: Option<ShortcutId>,
}

impl OpenWindowRequest {
    pub fn new(kind: AppKind) -> Self {
        Self {
            kind,
            title: None,
            position: None,
            size: None,
            folder: None,
        }
    }

    pub fn folder(folder: ShortcutId, label: impl Into<String>) -> Self {
        Self {
            title: Some(label.into()),
            folder: Some(folder),
            ..Self::new(AppKind::Folder)
        }
    }
}

/// Complete shell state owned by the runtime provider.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub config: ShellConfig,
    pub windows: WindowManager,
    pub desktop: DesktopSpace,
    pub files: FileShelf,
    pub wallpaper_id: String,
    /// Cleared when the auth session ends; windows only open while it is set.
    pub session_active: bool,
}

impl DesktopState {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            windows: WindowManager::new(config.drag_threshold_px),
            desktop: DesktopSpace::new(config),
            files: FileShelf::default(),
            wallpaper_id: DEFAULT_WALLPAPER_ID.to_string(),
            session_active: true,
        }
    }
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn corners_normalize_in_any_drag_direction() {
        let rect = Rect::from_corners(Point::new(50, 40), Point::new(10, 90));
        assert_eq!(
            rect,
            Rect {
                x: 10,
                y: 40,
                w: 40,
                h: 50
            }
        );
    }

    #[test]
    fn touching_rects_intersect_but_do_not_overlap() {
        let a = Rect::at(Point::new(0, 0), Size::new(10, 10));
        let b = Rect::at(Point::new(10, 0), Size::new(10, 10));
        assert!(a.intersects(b));
        assert!(!a.overlaps(b));
    }

    #[test]
    fn folder_request_carries_label_and_reference() {
        let request = OpenWindowRequest::folder(ShortcutId::new("folder-1"), "New Folder 1");
        assert_eq!(request.kind, AppKind::Folder);
        assert_eq!(request.title.as_deref(), Some("New Folder 1"));
        assert_eq!(request.folder, Some(ShortcutId::new("folder-1")));
    }
}
