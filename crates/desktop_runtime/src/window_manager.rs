//! Window manager: open windows, stacking, focus, minimize/maximize, title-bar drags, and the
//! start-menu flag.
//!
//! Stacking values come from an injected [`SequenceGenerator`] and only ever grow, so the most
//! recently raised window is always on top. Unknown window ids are ignored.

use crate::{
    gesture::{GestureOutcome, GestureTracker},
    model::{OpenWindowRequest, Point, RestoreGeometry, WindowId, WindowRecord},
    sequence::SequenceGenerator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TitleBarDrag {
    window_id: WindowId,
    tracker: GestureTracker,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowManager {
    windows: Vec<WindowRecord>,
    active: Option<WindowId>,
    ids: SequenceGenerator,
    stacking: SequenceGenerator,
    start_menu_open: bool,
    title_drag: Option<TitleBarDrag>,
    drag_threshold_px: i32,
}

impl WindowManager {
    /// Creates an empty manager with fresh id and stacking sequences.
    pub fn new(drag_threshold_px: i32) -> Self {
        Self::with_sequences(
            SequenceGenerator::default(),
            SequenceGenerator::default(),
            drag_threshold_px,
        )
    }

    /// Creates a manager drawing window ids and stacking values from the given generators.
    pub fn with_sequences(
        ids: SequenceGenerator,
        stacking: SequenceGenerator,
        drag_threshold_px: i32,
    ) -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            ids,
            stacking,
            start_menu_open: false,
            title_drag: None,
            drag_threshold_px,
        }
    }

    /// Windows in the order they were opened.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Looks up an open window.
    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|window| window.id == id)
    }

    /// Taskbar order is open order, independent of stacking.
    pub fn ordered_for_taskbar(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter()
    }

    /// The active window, if any. Never a minimized one.
    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active
    }

    /// Record of the active window.
    pub fn active_window(&self) -> Option<&WindowRecord> {
        self.active.and_then(|id| self.window(id))
    }

    /// Whether `id` is the active window.
    pub fn is_active(&self, id: WindowId) -> bool {
        self.active == Some(id)
    }

    /// Whether the start menu is showing.
    pub fn start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    /// Window being dragged by its title bar, once a press has been armed.
    pub fn dragging_window(&self) -> Option<WindowId> {
        self.title_drag.map(|drag| drag.window_id)
    }

    /// Opens a new window on top, staggered by the number of windows already open.
    pub fn open(&mut self, request: OpenWindowRequest) -> WindowId {
        let kind = request.kind;
        let n = self.windows.len() as i32;
        let base = request.position.unwrap_or_else(|| kind.default_position());
        let position = Point::new(base.x + (n * 14) % 60, base.y + (n * 10) % 50);

        let id = WindowId(self.ids.next_value());
        self.windows.push(WindowRecord {
            id,
            kind,
            title: request.title.unwrap_or_else(|| kind.title().to_string()),
            position,
            size: request.size.unwrap_or_else(|| kind.default_size()),
            minimized: false,
            maximized: false,
            z_order: self.stacking.next_value(),
            restore: None,
            folder: request.folder,
        });
        self.active = Some(id);
        self.start_menu_open = false;
        id
    }

    /// Raises, un-minimizes, and activates `id`. Returns `false` for unknown ids.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let z_order = self.stacking.peek();
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        window.minimized = false;
        window.z_order = z_order;
        self.stacking.next_value();
        self.active = Some(id);
        self.start_menu_open = false;
        true
    }

    /// Moves `id`, clamping both coordinates to be non-negative.
    pub fn move_to(&mut self, id: WindowId, position: Point) {
        if let Some(window) = self.window_mut(id) {
            window.position = position.clamped_non_negative();
        }
    }

    /// Hides `id` from the desktop, deactivating it and dropping any title-bar drag on it.
    pub fn minimize(&mut self, id: WindowId) {
        let Some(window) = self.window_mut(id) else {
            return;
        };
        window.minimized = true;
        if self.active == Some(id) {
            self.active = None;
        }
        if self.dragging_window() == Some(id) {
            self.title_drag = None;
        }
    }

    /// Maximizes (saving geometry) or restores `id`, then raises and activates it.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        let z_order = self.stacking.peek();
        let Some(window) = self.window_mut(id) else {
            return;
        };
        if window.maximized {
            if let Some(restore) = window.restore.take() {
                window.position = restore.position;
                window.size = restore.size;
            }
            window.maximized = false;
        } else {
            window.restore = Some(RestoreGeometry {
                position: window.position,
                size: window.size,
            });
            window.maximized = true;
        }
        window.minimized = false;
        window.z_order = z_order;
        self.stacking.next_value();
        self.active = Some(id);
        if self.dragging_window() == Some(id) {
            self.title_drag = None;
        }
    }

    /// Closes `id`. If it was active, the top-most visible window takes over.
    pub fn close(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|window| window.id != id);
        if self.windows.len() == before {
            return;
        }
        if self.dragging_window() == Some(id) {
            self.title_drag = None;
        }
        if self.active == Some(id) {
            self.active = self
                .windows
                .iter()
                .filter(|window| !window.minimized)
                .max_by_key(|window| window.z_order)
                .map(|window| window.id);
        }
    }

    /// Taskbar button: minimizes the active window, otherwise focuses it.
    pub fn handle_taskbar_click(&mut self, id: WindowId) {
        let Some(window) = self.window(id) else {
            return;
        };
        if self.active == Some(id) && !window.minimized {
            self.minimize(id);
        } else {
            self.focus(id);
        }
    }

    /// Opens or closes the start menu.
    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    /// Closes the start menu; no-op when it is already closed.
    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    /// Drops every window and closes the start menu. Sequences keep counting.
    pub fn close_all(&mut self) {
        self.windows.clear();
        self.active = None;
        self.title_drag = None;
        self.start_menu_open = false;
    }

    /// Title-bar press: focuses immediately, then arms a drag unless the window is maximized or
    /// the press is part of a multi-click.
    pub fn begin_title_drag(&mut self, id: WindowId, pointer: Point, click_count: u32) -> bool {
        if !self.focus(id) {
            return false;
        }
        self.title_drag = None;
        let Some(window) = self.window(id) else {
            return false;
        };
        if window.maximized {
            return false;
        }
        let mut tracker = GestureTracker::new(self.drag_threshold_px);
        if !tracker.press(pointer, window.position, click_count) {
            return false;
        }
        self.title_drag = Some(TitleBarDrag {
            window_id: id,
            tracker,
        });
        true
    }

    /// Feeds a pointer move to the title-bar drag, moving the window once past the threshold.
    pub fn update_title_drag(&mut self, pointer: Point) -> Option<Point> {
        let drag = self.title_drag.as_mut()?;
        let update = drag.tracker.update(pointer)?;
        let window_id = drag.window_id;
        self.move_to(window_id, update.position);
        self.window(window_id).map(|window| window.position)
    }

    /// Ends the title-bar session, reporting whether it was a click or a drag.
    pub fn end_title_drag(&mut self) -> Option<GestureOutcome> {
        let mut drag = self.title_drag.take()?;
        drag.tracker.release()
    }

    /// Drops any title-bar drag without a release. The window keeps its current position.
    pub fn cancel_title_drag(&mut self) {
        self.title_drag = None;
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|window| window.id == id)
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DRAG_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppKind, Size};

    fn open(manager: &mut WindowManager, kind: AppKind) -> WindowId {
        manager.open(OpenWindowRequest::new(kind))
    }

    fn z(manager: &WindowManager, id: WindowId) -> u64 {
        manager.window(id).map(|w| w.z_order).unwrap_or_default()
    }

    #[test]
    fn open_staggers_and_activates() {
        let mut manager = WindowManager::default();
        manager.toggle_start_menu();
        let first = open(&mut manager, AppKind::Files);
        let second = open(&mut manager, AppKind::Files);

        assert_eq!(manager.window(first).map(|w| w.position), Some(Point::new(70, 80)));
        assert_eq!(manager.window(second).map(|w| w.position), Some(Point::new(84, 90)));
        assert_eq!(manager.window(second).map(|w| w.size), Some(Size::new(420, 320)));
        assert_eq!(manager.active_window_id(), Some(second));
        assert!(!manager.start_menu_open());
    }

    #[test]
    fn stagger_wraps_with_many_windows() {
        let mut manager = WindowManager::default();
        for _ in 0..5 {
            open(&mut manager, AppKind::About);
        }
        let sixth = open(&mut manager, AppKind::About);
        // n = 5: (5*14) % 60 = 10, (5*10) % 50 = 0
        assert_eq!(manager.window(sixth).map(|w| w.position), Some(Point::new(190, 110)));
    }

    #[test]
    fn focus_raises_above_every_other_window() {
        let mut manager = WindowManager::default();
        let a = open(&mut manager, AppKind::Files);
        let b = open(&mut manager, AppKind::Paint);
        assert!(z(&manager, b) > z(&manager, a));

        assert!(manager.focus(a));
        assert!(z(&manager, a) > z(&manager, b));
        assert_eq!(manager.active_window_id(), Some(a));
    }

    #[test]
    fn stacking_values_stay_unique() {
        let mut manager = WindowManager::default();
        let a = open(&mut manager, AppKind::Files);
        let b = open(&mut manager, AppKind::Paint);
        let c = open(&mut manager, AppKind::Minesweeper);

        let top = |manager: &WindowManager| {
            manager.windows().iter().max_by_key(|w| w.z_order).map(|w| w.id)
        };
        manager.focus(a);
        assert_eq!(top(&manager), Some(a));
        manager.toggle_maximize(c);
        assert_eq!(top(&manager), Some(c));
        manager.minimize(b);
        manager.handle_taskbar_click(b);
        assert_eq!(top(&manager), Some(b));
        manager.focus(a);
        manager.toggle_maximize(c);
        manager.close(a);
        let d = open(&mut manager, AppKind::About);
        manager.handle_taskbar_click(c);
        manager.focus(d);
        assert_eq!(top(&manager), Some(d));

        let mut values: Vec<u64> = manager.windows().iter().map(|w| w.z_order).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), manager.windows().len());
    }

    #[test]
    fn minimize_clears_active_and_taskbar_click_toggles() {
        let mut manager = WindowManager::default();
        let id = open(&mut manager, AppKind::Notepad);

        manager.handle_taskbar_click(id);
        assert!(manager.window(id).is_some_and(|w| w.minimized));
        assert_eq!(manager.active_window_id(), None);

        manager.handle_taskbar_click(id);
        assert!(manager.window(id).is_some_and(|w| !w.minimized));
        assert_eq!(manager.active_window_id(), Some(id));
    }

    #[test]
    fn taskbar_click_on_inactive_window_focuses_it() {
        let mut manager = WindowManager::default();
        let a = open(&mut manager, AppKind::Files);
        let b = open(&mut manager, AppKind::Paint);
        manager.handle_taskbar_click(a);
        assert_eq!(manager.active_window_id(), Some(a));
        assert!(z(&manager, a) > z(&manager, b));
    }

    #[test]
    fn maximize_saves_and_restores_geometry() {
        let mut manager = WindowManager::default();
        let id = manager.open(OpenWindowRequest {
            size: Some(Size::new(610, 455)),
            ..OpenWindowRequest::new(AppKind::Settings)
        });
        manager.move_to(id, Point::new(300, 200));
        let saved = RestoreGeometry {
            position: Point::new(300, 200),
            size: Size::new(610, 455),
        };

        manager.toggle_maximize(id);
        let window = manager.window(id).expect("window");
        assert!(window.maximized);
        assert_eq!(window.restore, Some(saved));

        // Geometry touched while maximized is discarded on restore.
        manager.move_to(id, Point::new(0, 0));
        manager.toggle_maximize(id);
        let window = manager.window(id).expect("window");
        assert!(!window.maximized);
        assert_eq!(window.restore, None);
        assert_eq!((window.position, window.size), (saved.position, saved.size));

        manager.toggle_maximize(id);
        manager.toggle_maximize(id);
        let window = manager.window(id).expect("window");
        assert_eq!((window.position, window.size), (saved.position, saved.size));
    }

    #[test]
    fn move_clamps_to_non_negative_only() {
        let mut manager = WindowManager::default();
        let id = open(&mut manager, AppKind::Files);
        manager.move_to(id, Point::new(-40, 5000));
        assert_eq!(manager.window(id).map(|w| w.position), Some(Point::new(0, 5000)));
    }

    #[test]
    fn closing_active_window_promotes_top_visible_window() {
        let mut manager = WindowManager::default();
        let a = open(&mut manager, AppKind::Files);
        let b = open(&mut manager, AppKind::Paint);
        let c = open(&mut manager, AppKind::About);
        manager.minimize(b);
        manager.focus(c);

        manager.close(c);
        assert_eq!(manager.active_window_id(), Some(a));

        manager.close(a);
        assert_eq!(manager.active_window_id(), None);
        assert_eq!(manager.windows().len(), 1);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut manager = WindowManager::default();
        let id = open(&mut manager, AppKind::Files);
        let snapshot = manager.clone();

        let ghost = WindowId(999);
        assert!(!manager.focus(ghost));
        manager.minimize(ghost);
        manager.toggle_maximize(ghost);
        manager.close(ghost);
        manager.move_to(ghost, Point::new(1, 1));
        manager.handle_taskbar_click(ghost);

        assert_eq!(manager, snapshot);
        assert_eq!(manager.active_window_id(), Some(id));
    }

    #[test]
    fn title_drag_moves_window_after_threshold() {
        let mut manager = WindowManager::default();
        let a = open(&mut manager, AppKind::Files);
        let b = open(&mut manager, AppKind::Paint);

        assert!(manager.begin_title_drag(a, Point::new(100, 90), 1));
        assert_eq!(manager.active_window_id(), Some(a));
        assert!(z(&manager, a) > z(&manager, b));

        assert_eq!(manager.update_title_drag(Point::new(101, 91)), None);
        assert_eq!(
            manager.update_title_drag(Point::new(150, 60)),
            Some(Point::new(120, 50))
        );
        assert_eq!(manager.end_title_drag(), Some(GestureOutcome::Drag));
        assert_eq!(manager.dragging_window(), None);
    }

    #[test]
    fn title_drag_never_leaves_the_top_left_quadrant() {
        let mut manager = WindowManager::default();
        let id = open(&mut manager, AppKind::Files);
        manager.begin_title_drag(id, Point::new(100, 90), 1);
        assert_eq!(
            manager.update_title_drag(Point::new(0, 0)),
            Some(Point::new(0, 0))
        );
    }

    #[test]
    fn maximized_windows_and_double_clicks_do_not_drag() {
        let mut manager = WindowManager::default();
        let id = open(&mut manager, AppKind::Files);

        assert!(!manager.begin_title_drag(id, Point::new(100, 90), 2));
        assert_eq!(manager.dragging_window(), None);

        manager.toggle_maximize(id);
        assert!(!manager.begin_title_drag(id, Point::new(100, 90), 1));
        assert_eq!(manager.update_title_drag(Point::new(300, 300)), None);
        assert_eq!(manager.active_window_id(), Some(id));
    }

    #[test]
    fn close_all_resets_windows_and_menu() {
        let mut manager = WindowManager::default();
        open(&mut manager, AppKind::Files);
        open(&mut manager, AppKind::Paint);
        manager.toggle_start_menu();

        manager.close_all();
        assert!(manager.windows().is_empty());
        assert_eq!(manager.active_window(), None);
        assert!(!manager.start_menu_open());

        let next = open(&mut manager, AppKind::About);
        assert_eq!(next, WindowId(3));
    }

    #[test]
    fn injected_sequences_drive_ids_and_stacking() {
        let mut manager = WindowManager::with_sequences(
            SequenceGenerator::starting_at(100),
            SequenceGenerator::starting_at(500),
            4,
        );
        let id = open(&mut manager, AppKind::Minesweeper);
        assert_eq!(id, WindowId(100));
        assert_eq!(z(&manager, id), 500);
    }
}
