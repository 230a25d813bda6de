//! Tunable shell geometry.
//!
//! Every value has a default matching the classic layout; hosts can override individual fields
//! through serde (`#[serde(default)]` fills the rest).

use serde::{Deserialize, Serialize};

use crate::model::{Point, Size};

/// Distance, in pixels, a pressed pointer must travel before a press becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: i32 = 4;
/// Height of the taskbar strip along the bottom edge.
pub const TASKBAR_HEIGHT_PX: i32 = 38;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Bounds for where a desktop icon's top-left corner may land.
pub struct IconClampInsets {
    /// Smallest allowed x.
    pub min_x: i32,
    /// Smallest allowed y.
    pub min_y: i32,
    /// Distance kept clear from the right edge of the surface.
    pub right: i32,
    /// Distance kept clear from the bottom edge of the surface.
    pub bottom: i32,
}

impl Default for IconClampInsets {
    fn default() -> Self {
        Self {
            min_x: 4,
            min_y: 4,
            right: 90,
            bottom: 140,
        }
    }
}

impl IconClampInsets {
    /// Clamps `position` into `surface`. Surfaces too small for the insets pin to the minimum.
    pub fn clamp(self, position: Point, surface: Size) -> Point {
        let max_x = (surface.w - self.right).max(self.min_x);
        let max_y = (surface.h - self.bottom).max(self.min_y);
        Point::new(
            position.x.clamp(self.min_x, max_x),
            position.y.clamp(self.min_y, max_y),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Shell geometry configuration.
pub struct ShellConfig {
    /// Press-to-drag threshold in pixels.
    pub drag_threshold_px: i32,
    /// Box used for marquee hit-testing and restore placement.
    pub icon_footprint: Size,
    /// Allowed icon placement area.
    pub icon_clamp: IconClampInsets,
    /// Bottom-right drop zone that recycles dragged icons.
    pub hot_zone: Size,
    /// Where new folders appear.
    pub new_folder_position: Point,
    /// Taskbar height, excluded from maximized window geometry.
    pub taskbar_height_px: i32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
            icon_footprint: Size::new(80, 80),
            icon_clamp: IconClampInsets::default(),
            hot_zone: Size::new(180, 200),
            new_folder_position: Point::new(140, 140),
            taskbar_height_px: TASKBAR_HEIGHT_PX,
        }
    }
}

impl ShellConfig {
    /// Returns whether `pointer` sits inside the bottom-right hot zone of `surface`.
    pub fn in_hot_zone(&self, pointer: Point, surface: Size) -> bool {
        pointer.x >= surface.w - self.hot_zone.w && pointer.y >= surface.h - self.hot_zone.h
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let config: ShellConfig =
            serde_json::from_str(r#"{"drag_threshold_px": 8}"#).expect("parse config");
        assert_eq!(config.drag_threshold_px, 8);
        assert_eq!(config.icon_footprint, Size::new(80, 80));
        assert_eq!(config.icon_clamp, IconClampInsets::default());
    }

    #[test]
    fn clamp_keeps_icons_inside_the_surface() {
        let insets = IconClampInsets::default();
        let surface = Size::new(1024, 768);
        assert_eq!(
            insets.clamp(Point::new(-30, 5000), surface),
            Point::new(4, 628)
        );
        assert_eq!(
            insets.clamp(Point::new(2000, -1), surface),
            Point::new(934, 4)
        );
        assert_eq!(
            insets.clamp(Point::new(50, 50), Size::new(10, 10)),
            Point::new(4, 4)
        );
    }

    #[test]
    fn hot_zone_is_anchored_bottom_right() {
        let config = ShellConfig::default();
        let surface = Size::new(1000, 800);
        assert!(config.in_hot_zone(Point::new(820, 600), surface));
        assert!(config.in_hot_zone(Point::new(999, 799), surface));
        assert!(!config.in_hot_zone(Point::new(819, 700), surface));
        assert!(!config.in_hot_zone(Point::new(900, 599), surface));
    }
}
