//! Desktop spatial engine: free-form icons, selection, marquee, folders, and the recycle set.
//!
//! All operations are total. Unknown ids are ignored and geometry edge cases resolve by clamping
//! or doing nothing, so the reducer can forward pointer input without validation.

use std::collections::BTreeMap;

use crate::{
    config::ShellConfig,
    gesture::{GestureOutcome, GestureTracker},
    model::{Point, Rect, Size},
    selection::SelectionSet,
    sequence::SequenceGenerator,
    shortcuts::{default_desktop_shortcuts, recycle_bin_shortcut, Placement, Shortcut, ShortcutId},
};

const RESTORE_GRID_ORIGIN: Point = Point::new(20, 20);
const RESTORE_GRID_COLUMNS: i32 = 10;
const RESTORE_GRID_ROWS: i32 = 7;

/// A shortcut sitting in the recycle bin. Folders keep a snapshot of their contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecycledShortcut {
    pub shortcut: Shortcut,
    pub contents: Option<Vec<Shortcut>>,
}

/// Position batch produced by an icon drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMove {
    pub id: ShortcutId,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconReleaseOutcome {
    /// No drag session was active.
    Idle,
    Clicked,
    Moved,
    /// Dropped on the hot zone; the listed shortcuts went to the recycle bin.
    Recycled(Vec<ShortcutId>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct IconDragSession {
    /// Drag targets paired with their pointer-relative grab offsets.
    targets: Vec<(ShortcutId, Point)>,
    tracker: GestureTracker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarqueeSession {
    origin: Point,
    current: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopSpace {
    config: ShellConfig,
    shortcuts: Vec<Shortcut>,
    recycle_bin: Shortcut,
    folders: BTreeMap<ShortcutId, Vec<Shortcut>>,
    recycled: Vec<RecycledShortcut>,
    selection: SelectionSet,
    icon_drag: Option<IconDragSession>,
    marquee: Option<MarqueeSession>,
    folder_labels: SequenceGenerator,
}

impl DesktopSpace {
    /// Creates a desktop holding the stock icon set.
    pub fn new(config: ShellConfig) -> Self {
        Self::with_shortcuts(config, default_desktop_shortcuts())
    }

    /// Creates a desktop holding `shortcuts`, with an empty recycle bin and no folders filed.
    pub fn with_shortcuts(config: ShellConfig, shortcuts: Vec<Shortcut>) -> Self {
        Self {
            config,
            shortcuts,
            recycle_bin: recycle_bin_shortcut(),
            folders: BTreeMap::new(),
            recycled: Vec::new(),
            selection: SelectionSet::default(),
            icon_drag: None,
            marquee: None,
            folder_labels: SequenceGenerator::starting_at(1),
        }
    }

    /// Shortcuts placed on the desktop, in creation order.
    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    /// Looks up a desktop-placed shortcut.
    pub fn shortcut(&self, id: &ShortcutId) -> Option<&Shortcut> {
        self.shortcuts.iter().find(|shortcut| &shortcut.id == id)
    }

    /// The pinned Recycle Bin shortcut.
    pub fn recycle_bin(&self) -> &Shortcut {
        &self.recycle_bin
    }

    /// Currently selected desktop shortcuts.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Recycled shortcuts, oldest first.
    pub fn recycled(&self) -> &[RecycledShortcut] {
        &self.recycled
    }

    /// Whether an icon press is armed or dragging.
    pub fn is_dragging_icons(&self) -> bool {
        self.icon_drag.is_some()
    }

    /// Normalized marquee rectangle while a marquee is live.
    pub fn marquee_rect(&self) -> Option<Rect> {
        self.marquee
            .map(|session| Rect::from_corners(session.origin, session.current))
    }

    /// Entries filed in `folder`. Unknown folders are empty.
    pub fn folder_contents(&self, folder: &ShortcutId) -> &[Shortcut] {
        self.folders.get(folder).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(id, label)` of every folder currently on the desktop.
    pub fn folder_options(&self) -> Vec<(ShortcutId, String)> {
        self.shortcuts
            .iter()
            .filter(|shortcut| shortcut.is_folder())
            .map(|shortcut| (shortcut.id.clone(), shortcut.label.clone()))
            .collect()
    }

    /// Finds a shortcut anywhere a user can activate it from: desktop, pinned slot, or a folder.
    pub fn find_activatable(&self, id: &ShortcutId) -> Option<&Shortcut> {
        if id == &self.recycle_bin.id {
            return Some(&self.recycle_bin);
        }
        self.shortcut(id)
            .or_else(|| self.folders.values().flatten().find(|entry| &entry.id == id))
    }

    /// Display label of a folder, wherever it is filed.
    pub fn folder_label(&self, folder: &ShortcutId) -> Option<&str> {
        self.find_activatable(folder)
            .filter(|shortcut| shortcut.is_folder())
            .map(|shortcut| shortcut.label.as_str())
    }

    /// Deselects every icon.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Presses an icon: updates the selection and arms a drag of the resulting selection.
    ///
    /// A plain press on an unselected icon selects only it; an additive press adds it. Pressing an
    /// already-selected icon keeps the selection so the group drags together. Multi-click presses
    /// leave everything untouched. Returns whether a drag session was armed.
    pub fn begin_icon_drag(
        &mut self,
        id: &ShortcutId,
        pointer: Point,
        additive: bool,
        click_count: u32,
    ) -> bool {
        if click_count > 1 {
            return false;
        }
        let Some(anchor) = self.shortcut(id).and_then(Shortcut::position) else {
            return false;
        };

        if !self.selection.contains(id) {
            if additive {
                self.selection.insert(id.clone());
            } else {
                self.selection = SelectionSet::single(id.clone());
            }
        }

        let targets: Vec<(ShortcutId, Point)> = self
            .selection
            .iter()
            .filter_map(|selected| {
                self.shortcut(selected)
                    .and_then(Shortcut::position)
                    .map(|position| (selected.clone(), pointer - position))
            })
            .collect();
        if targets.is_empty() {
            return false;
        }

        let mut tracker = GestureTracker::new(self.config.drag_threshold_px);
        tracker.press(pointer, anchor, click_count);
        self.marquee = None;
        self.icon_drag = Some(IconDragSession { targets, tracker });
        true
    }

    /// Feeds a pointer move to the active icon drag and returns the proposed positions.
    ///
    /// Nothing is produced until the pointer has crossed the drag threshold.
    pub fn drag_move(&mut self, pointer: Point) -> Vec<IconMove> {
        let Some(session) = self.icon_drag.as_mut() else {
            return Vec::new();
        };
        if session.tracker.update(pointer).is_none() {
            return Vec::new();
        }
        session
            .targets
            .iter()
            .map(|(id, offset)| IconMove {
                id: id.clone(),
                position: pointer - *offset,
            })
            .collect()
    }

    /// Stores a batch of positions, clamping each into `surface`.
    pub fn move_shortcuts(&mut self, moves: &[IconMove], surface: Size) {
        let clamp = self.config.icon_clamp;
        for icon_move in moves {
            let Some(shortcut) = self
                .shortcuts
                .iter_mut()
                .find(|shortcut| shortcut.id == icon_move.id)
            else {
                continue;
            };
            if let Placement::Desktop { position } = &mut shortcut.placement {
                *position = clamp.clamp(icon_move.position, surface);
            }
        }
    }

    /// Ends the icon drag. A real drag released inside the hot zone recycles every target.
    pub fn end_icon_drag(&mut self, pointer: Point, surface: Size) -> IconReleaseOutcome {
        let Some(mut session) = self.icon_drag.take() else {
            return IconReleaseOutcome::Idle;
        };
        match session.tracker.release() {
            Some(GestureOutcome::Drag) if self.config.in_hot_zone(pointer, surface) => {
                let ids: Vec<ShortcutId> =
                    session.targets.into_iter().map(|(id, _)| id).collect();
                IconReleaseOutcome::Recycled(self.recycle_shortcuts(&ids))
            }
            Some(GestureOutcome::Drag) => IconReleaseOutcome::Moved,
            Some(GestureOutcome::Click) => IconReleaseOutcome::Clicked,
            None => IconReleaseOutcome::Idle,
        }
    }

    /// Drops the icon session without moving or recycling anything.
    pub fn cancel_icon_drag(&mut self) {
        self.icon_drag = None;
    }

    /// Starts a marquee on a background press. Only a primary single click qualifies.
    pub fn begin_marquee(&mut self, pointer: Point, primary_button: bool, click_count: u32) -> bool {
        if !primary_button || click_count > 1 {
            return false;
        }
        self.selection.clear();
        self.icon_drag = None;
        self.marquee = Some(MarqueeSession {
            origin: pointer,
            current: pointer,
        });
        true
    }

    /// Drops the marquee, leaving the selection as the background press left it.
    pub fn cancel_marquee(&mut self) {
        self.marquee = None;
    }

    /// Moves the marquee's free corner.
    pub fn update_marquee(&mut self, pointer: Point) {
        if let Some(session) = self.marquee.as_mut() {
            session.current = pointer;
        }
    }

    /// Finishes the marquee, replacing the selection with every icon whose footprint it touches.
    ///
    /// Returns the number of selected icons, or `None` if no marquee was active.
    pub fn end_marquee(&mut self) -> Option<usize> {
        let rect = self.marquee_rect()?;
        self.marquee = None;
        if rect.is_empty() {
            self.selection.clear();
            return Some(0);
        }
        let footprint = self.config.icon_footprint;
        let hits: Vec<ShortcutId> = self
            .shortcuts
            .iter()
            .filter(|shortcut| {
                shortcut
                    .footprint(footprint)
                    .is_some_and(|bounds| bounds.intersects(rect))
            })
            .map(|shortcut| shortcut.id.clone())
            .collect();
        let count = hits.len();
        self.selection.replace_with(hits);
        Some(count)
    }

    /// Creates an empty folder at the configured spot and returns its id.
    pub fn new_folder(&mut self) -> ShortcutId {
        let (id, n) = loop {
            let n = self.folder_labels.next_value();
            let id = ShortcutId::new(format!("folder-{n}"));
            if !self.id_in_use(&id) {
                break (id, n);
            }
        };
        self.shortcuts.push(Shortcut::folder(
            id.clone(),
            format!("New Folder {n}"),
            self.config.new_folder_position,
        ));
        self.folders.insert(id.clone(), Vec::new());
        id
    }

    /// Files the selection into `folder`, skipping the folder itself and pinned shortcuts.
    ///
    /// Returns the moved ids in selection order.
    pub fn move_selection_to_folder(&mut self, folder: &ShortcutId) -> Vec<ShortcutId> {
        if !self.shortcut(folder).is_some_and(Shortcut::is_folder) {
            return Vec::new();
        }
        let ids: Vec<ShortcutId> = self
            .selection
            .iter()
            .filter(|id| *id != folder)
            .filter(|id| self.shortcut(id).is_some_and(Shortcut::is_movable))
            .cloned()
            .collect();
        if ids.is_empty() {
            return ids;
        }

        let mut moved = Vec::with_capacity(ids.len());
        for id in &ids {
            if let Some(index) = self.shortcuts.iter().position(|s| &s.id == id) {
                let mut shortcut = self.shortcuts.remove(index);
                shortcut.placement = Placement::Folder {
                    folder: folder.clone(),
                };
                moved.push(shortcut);
            }
        }
        self.folders.entry(folder.clone()).or_default().extend(moved);
        self.selection.retain(|id| !ids.contains(id));
        ids
    }

    /// Recycles every selected shortcut.
    pub fn delete_selection(&mut self) -> Vec<ShortcutId> {
        let ids = self.selection.to_vec();
        self.recycle_shortcuts(&ids)
    }

    /// Moves desktop shortcuts into the recycle bin. Pinned and unknown ids are skipped.
    ///
    /// Returns the ids actually recycled.
    pub fn recycle_shortcuts(&mut self, ids: &[ShortcutId]) -> Vec<ShortcutId> {
        let mut recycled = Vec::new();
        for id in ids {
            let Some(index) = self
                .shortcuts
                .iter()
                .position(|shortcut| &shortcut.id == id && shortcut.is_movable())
            else {
                continue;
            };
            let shortcut = self.shortcuts.remove(index);
            let contents = shortcut
                .is_folder()
                .then(|| self.folders.remove(id).unwrap_or_default());
            self.recycled.push(RecycledShortcut { shortcut, contents });
            self.selection.remove(id);
            recycled.push(id.clone());
        }
        if self
            .icon_drag
            .as_ref()
            .is_some_and(|session| session.targets.iter().any(|(id, _)| recycled.contains(id)))
        {
            self.icon_drag = None;
        }
        recycled
    }

    /// Returns recycled shortcuts to the desktop at free grid slots; folders get their contents
    /// back.
    pub fn restore_shortcuts(&mut self, ids: &[ShortcutId]) -> Vec<ShortcutId> {
        let mut restored = Vec::new();
        for id in ids {
            let Some(index) = self
                .recycled
                .iter()
                .position(|entry| &entry.shortcut.id == id)
            else {
                continue;
            };
            let RecycledShortcut {
                mut shortcut,
                contents,
            } = self.recycled.remove(index);
            shortcut.placement = Placement::Desktop {
                position: self.next_free_position(),
            };
            if let Some(contents) = contents {
                self.folders.insert(shortcut.id.clone(), contents);
            }
            self.shortcuts.push(shortcut);
            restored.push(id.clone());
        }
        restored
    }

    /// Restores every recycled shortcut.
    pub fn restore_all(&mut self) -> Vec<ShortcutId> {
        let ids: Vec<ShortcutId> = self
            .recycled
            .iter()
            .map(|entry| entry.shortcut.id.clone())
            .collect();
        self.restore_shortcuts(&ids)
    }

    /// Discards the recycle bin, including folders filed inside recycled folders.
    pub fn empty_recycle_bin(&mut self) {
        let mut nested: Vec<ShortcutId> = self
            .recycled
            .drain(..)
            .filter_map(|entry| entry.contents)
            .flatten()
            .filter(Shortcut::is_folder)
            .map(|shortcut| shortcut.id)
            .collect();
        while let Some(folder) = nested.pop() {
            if let Some(entries) = self.folders.remove(&folder) {
                nested.extend(
                    entries
                        .into_iter()
                        .filter(Shortcut::is_folder)
                        .map(|shortcut| shortcut.id),
                );
            }
        }
    }

    /// First grid slot (column-major from the top-left) whose footprint overlaps no icon.
    fn next_free_position(&self) -> Point {
        let footprint = self.config.icon_footprint;
        let step_x = footprint.w + 20;
        let step_y = footprint.h + 18;
        let occupied: Vec<Rect> = self
            .shortcuts
            .iter()
            .filter_map(|shortcut| shortcut.footprint(footprint))
            .collect();

        for column in 0..RESTORE_GRID_COLUMNS {
            for row in 0..RESTORE_GRID_ROWS {
                let slot = Point::new(
                    RESTORE_GRID_ORIGIN.x + column * step_x,
                    RESTORE_GRID_ORIGIN.y + row * step_y,
                );
                let bounds = Rect::at(slot, footprint);
                if !occupied.iter().any(|taken| taken.overlaps(bounds)) {
                    return slot;
                }
            }
        }
        let n = self.shortcuts.len() as i32;
        Point::new(RESTORE_GRID_ORIGIN.x + n * 14, RESTORE_GRID_ORIGIN.y + n * 14)
    }

    fn id_in_use(&self, id: &ShortcutId) -> bool {
        self.find_activatable(id).is_some()
            || self.folders.contains_key(id)
            || self.recycled.iter().any(|entry| &entry.shortcut.id == id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{model::AppKind, shortcuts::RECYCLE_BIN_ID};

    const SURFACE: Size = Size::new(1200, 900);

    fn id(raw: &str) -> ShortcutId {
        ShortcutId::new(raw)
    }

    fn space() -> DesktopSpace {
        DesktopSpace::new(ShellConfig::default())
    }

    fn drag(space: &mut DesktopSpace, from: Point, to: Point) -> IconReleaseOutcome {
        space.drag_move(Point::new(from.x + 10, from.y + 10));
        let moves = space.drag_move(to);
        space.move_shortcuts(&moves, SURFACE);
        space.end_icon_drag(to, SURFACE)
    }

    #[test]
    fn plain_press_replaces_selection_and_modifier_press_unions() {
        let mut space = space();
        assert!(space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1));
        space.end_icon_drag(Point::new(20, 20), SURFACE);
        assert_eq!(space.selection().to_vec(), vec![id("files")]);

        space.begin_icon_drag(&id("paint"), Point::new(20, 320), true, 1);
        space.end_icon_drag(Point::new(20, 320), SURFACE);
        assert_eq!(space.selection().to_vec(), vec![id("files"), id("paint")]);

        space.begin_icon_drag(&id("about"), Point::new(20, 610), false, 1);
        assert_eq!(space.selection().to_vec(), vec![id("about")]);
    }

    #[test]
    fn release_without_crossing_threshold_is_a_click() {
        let mut space = space();
        space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1);
        assert!(space.drag_move(Point::new(22, 21)).is_empty());
        assert_eq!(
            space.end_icon_drag(Point::new(22, 21), SURFACE),
            IconReleaseOutcome::Clicked
        );
        assert_eq!(
            space.shortcut(&id("files")).and_then(Shortcut::position),
            Some(Point::new(12, 12))
        );
    }

    #[test]
    fn double_click_press_does_not_drag_or_reselect() {
        let mut space = space();
        space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1);
        space.end_icon_drag(Point::new(20, 20), SURFACE);
        assert!(!space.begin_icon_drag(&id("paint"), Point::new(20, 320), false, 2));
        assert!(!space.is_dragging_icons());
        assert_eq!(space.selection().to_vec(), vec![id("files")]);
    }

    #[test]
    fn group_drag_preserves_relative_offsets() {
        let mut space = space();
        space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1);
        space.end_icon_drag(Point::new(20, 20), SURFACE);
        space.begin_icon_drag(&id("computer"), Point::new(20, 118), true, 1);

        let outcome = drag(&mut space, Point::new(20, 118), Point::new(320, 218));
        assert_eq!(outcome, IconReleaseOutcome::Moved);
        assert_eq!(
            space.shortcut(&id("files")).and_then(Shortcut::position),
            Some(Point::new(312, 112))
        );
        assert_eq!(
            space.shortcut(&id("computer")).and_then(Shortcut::position),
            Some(Point::new(312, 210))
        );
    }

    #[test]
    fn dragged_positions_are_clamped_into_the_surface() {
        let mut space = space();
        space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1);
        let moves = space.drag_move(Point::new(-400, -400));
        space.move_shortcuts(&moves, SURFACE);
        assert_eq!(
            space.shortcut(&id("files")).and_then(Shortcut::position),
            Some(Point::new(4, 4))
        );
    }

    #[test]
    fn drop_in_hot_zone_recycles_every_target() {
        let mut space = space();
        space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1);
        space.end_icon_drag(Point::new(20, 20), SURFACE);
        space.begin_icon_drag(&id("paint"), Point::new(20, 320), true, 1);

        let outcome = drag(&mut space, Point::new(20, 320), Point::new(1150, 850));
        assert_eq!(
            outcome,
            IconReleaseOutcome::Recycled(vec![id("files"), id("paint")])
        );
        assert!(space.shortcut(&id("files")).is_none());
        assert!(space.selection().is_empty());
        assert_eq!(space.recycled().len(), 2);
    }

    #[test]
    fn click_release_in_hot_zone_recycles_nothing() {
        let mut space = DesktopSpace::with_shortcuts(
            ShellConfig::default(),
            vec![Shortcut::launcher(
                "files",
                "My Files",
                "#fff",
                AppKind::Files,
                Point::new(1100, 800),
            )],
        );
        space.begin_icon_drag(&id("files"), Point::new(1110, 810), false, 1);
        assert_eq!(
            space.end_icon_drag(Point::new(1110, 810), SURFACE),
            IconReleaseOutcome::Clicked
        );
        assert_eq!(space.shortcuts().len(), 1);
    }

    #[test]
    fn unknown_icon_press_is_ignored() {
        let mut space = space();
        assert!(!space.begin_icon_drag(&id("nope"), Point::new(0, 0), false, 1));
        assert!(space.selection().is_empty());
        assert_eq!(
            space.end_icon_drag(Point::new(0, 0), SURFACE),
            IconReleaseOutcome::Idle
        );
    }

    #[test]
    fn marquee_selects_intersecting_footprints_inclusive_of_edges() {
        let mut space = space();
        assert!(space.begin_marquee(Point::new(200, 200), true, 1));
        // files spans 12..=92 horizontally; touching its right edge still counts.
        space.update_marquee(Point::new(92, 50));
        assert_eq!(space.end_marquee(), Some(2));
        assert_eq!(space.selection().to_vec(), vec![id("computer"), id("files")]);
    }

    #[test]
    fn marquee_selects_only_the_icon_it_covers() {
        let mut space = DesktopSpace::with_shortcuts(
            ShellConfig::default(),
            vec![
                Shortcut::launcher("near", "Near", "#fff", AppKind::Files, Point::new(10, 10)),
                Shortcut::launcher("far", "Far", "#fff", AppKind::Paint, Point::new(500, 500)),
            ],
        );
        space.begin_marquee(Point::new(0, 0), true, 1);
        space.update_marquee(Point::new(100, 100));
        assert_eq!(
            space.marquee_rect(),
            Some(Rect::at(Point::new(0, 0), Size::new(100, 100)))
        );
        assert_eq!(space.end_marquee(), Some(1));
        assert_eq!(space.selection().to_vec(), vec![id("near")]);
    }

    #[test]
    fn zero_area_marquee_selects_nothing() {
        let mut space = space();
        space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1);
        space.end_icon_drag(Point::new(20, 20), SURFACE);

        space.begin_marquee(Point::new(50, 50), true, 1);
        space.update_marquee(Point::new(50, 400));
        assert_eq!(space.end_marquee(), Some(0));
        assert!(space.selection().is_empty());
    }

    #[test]
    fn marquee_requires_primary_single_click() {
        let mut space = space();
        space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1);
        space.end_icon_drag(Point::new(20, 20), SURFACE);

        assert!(!space.begin_marquee(Point::new(500, 500), false, 1));
        assert!(!space.begin_marquee(Point::new(500, 500), true, 2));
        assert_eq!(space.marquee_rect(), None);
        assert_eq!(space.selection().len(), 1);

        assert!(space.begin_marquee(Point::new(500, 500), true, 1));
        assert!(space.selection().is_empty());
    }

    #[test]
    fn new_folders_get_incrementing_labels_at_the_default_spot() {
        let mut space = space();
        let first = space.new_folder();
        let second = space.new_folder();
        assert_eq!(first, id("folder-1"));
        assert_eq!(second, id("folder-2"));
        let folder = space.shortcut(&second).expect("folder exists");
        assert_eq!(folder.label, "New Folder 2");
        assert_eq!(folder.position(), Some(Point::new(140, 140)));
        assert!(space.folder_contents(&second).is_empty());
        assert_eq!(space.folder_options().len(), 2);
    }

    #[test]
    fn moving_selection_into_folder_skips_the_folder_itself() {
        let mut space = space();
        let folder = space.new_folder();
        space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1);
        space.end_icon_drag(Point::new(20, 20), SURFACE);
        space.begin_icon_drag(&folder, Point::new(150, 150), true, 1);
        space.end_icon_drag(Point::new(150, 150), SURFACE);

        let moved = space.move_selection_to_folder(&folder);
        assert_eq!(moved, vec![id("files")]);
        assert!(space.shortcut(&id("files")).is_none());
        assert!(space.shortcut(&folder).is_some());
        let contents = space.folder_contents(&folder);
        assert_eq!(contents.len(), 1);
        assert_eq!(
            contents[0].placement,
            Placement::Folder {
                folder: folder.clone()
            }
        );
        assert_eq!(space.selection().to_vec(), vec![folder]);
    }

    #[test]
    fn moving_into_a_missing_folder_is_a_no_op() {
        let mut space = space();
        space.begin_icon_drag(&id("files"), Point::new(20, 20), false, 1);
        assert!(space.move_selection_to_folder(&id("folder-9")).is_empty());
        assert!(space.shortcut(&id("files")).is_some());
    }

    #[test]
    fn recycle_bin_can_never_be_recycled() {
        let mut space = space();
        assert!(space.recycle_shortcuts(&[id(RECYCLE_BIN_ID)]).is_empty());
        assert_eq!(space.recycle_bin().id, id(RECYCLE_BIN_ID));
        assert!(space.recycled().is_empty());
    }

    #[test]
    fn recycled_folder_round_trips_with_its_contents() {
        let mut space = space();
        let folder = space.new_folder();
        space.begin_icon_drag(&id("paint"), Point::new(20, 320), false, 1);
        space.end_icon_drag(Point::new(20, 320), SURFACE);
        space.move_selection_to_folder(&folder);

        assert_eq!(space.recycle_shortcuts(&[folder.clone()]), vec![folder.clone()]);
        assert!(space.folder_contents(&folder).is_empty());
        assert_eq!(
            space.recycled()[0].contents.as_ref().map(Vec::len),
            Some(1)
        );

        assert_eq!(space.restore_all(), vec![folder.clone()]);
        assert_eq!(space.folder_contents(&folder).len(), 1);
        assert!(space.recycled().is_empty());
    }

    #[test]
    fn restored_shortcuts_do_not_overlap_existing_icons() {
        let mut space = space();
        space.recycle_shortcuts(&[id("files"), id("paint")]);
        space.restore_shortcuts(&[id("files"), id("paint")]);

        let footprint = ShellConfig::default().icon_footprint;
        let rects: Vec<Rect> = space
            .shortcuts()
            .iter()
            .filter_map(|shortcut| shortcut.footprint(footprint))
            .collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.overlaps(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn emptying_the_bin_discards_everything() {
        let mut space = space();
        space.recycle_shortcuts(&[id("about")]);
        space.empty_recycle_bin();
        assert!(space.recycled().is_empty());
        assert!(space.restore_shortcuts(&[id("about")]).is_empty());
    }

    #[test]
    fn emptying_the_bin_drops_folders_nested_in_recycled_folders() {
        let mut space = space();
        let outer = space.new_folder();
        let inner = space.new_folder();
        let innermost = space.new_folder();

        space.begin_icon_drag(&innermost, Point::new(150, 150), false, 1);
        space.end_icon_drag(Point::new(150, 150), SURFACE);
        space.move_selection_to_folder(&inner);
        space.begin_icon_drag(&inner, Point::new(150, 150), false, 1);
        space.end_icon_drag(Point::new(150, 150), SURFACE);
        space.move_selection_to_folder(&outer);
        assert!(space.folders.contains_key(&inner));

        space.recycle_shortcuts(&[outer.clone()]);
        space.empty_recycle_bin();
        assert!(space.folders.is_empty());
        assert!(space.find_activatable(&innermost).is_none());
    }

    #[test]
    fn folder_entries_stay_activatable() {
        let mut space = space();
        let folder = space.new_folder();
        space.begin_icon_drag(&id("about"), Point::new(20, 610), false, 1);
        space.end_icon_drag(Point::new(20, 610), SURFACE);
        space.move_selection_to_folder(&folder);

        assert!(space.find_activatable(&id("about")).is_some());
        assert!(space.find_activatable(&id(RECYCLE_BIN_ID)).is_some());
        assert_eq!(space.folder_label(&folder), Some("New Folder 1"));
    }
}
