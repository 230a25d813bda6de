//! Built-in wallpaper catalog.

/// Wallpaper used when nothing (or something unknown) is stored.
pub const DEFAULT_WALLPAPER_ID: &str = "teal-cloud";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperPreset {
    pub id: &'static str,
    pub label: &'static str,
    /// CSS `background` value.
    pub css: &'static str,
}

pub const WALLPAPERS: [WallpaperPreset; 3] = [
    WallpaperPreset {
        id: DEFAULT_WALLPAPER_ID,
        label: "Teal classic",
        css: "radial-gradient(220px at 15% 20%, #1bbaba55 0, transparent 60%), \
              radial-gradient(200px at 75% 25%, #14a7a755 0, transparent 60%), \
              radial-gradient(240px at 40% 70%, #11a0a055 0, transparent 60%), \
              linear-gradient(135deg, #007878 0%, #009898 100%)",
    },
    WallpaperPreset {
        id: "blue",
        label: "Blue steel",
        css: "linear-gradient(135deg, #1c4ea1 0%, #0f3b8c 100%)",
    },
    WallpaperPreset {
        id: "gray",
        label: "Gray",
        css: "linear-gradient(135deg, #7f7f7f 0%, #9b9b9b 100%)",
    },
];

pub fn is_known_wallpaper(id: &str) -> bool {
    WALLPAPERS.iter().any(|preset| preset.id == id)
}

/// Resolves `id`, falling back to the default preset.
pub fn wallpaper_preset(id: &str) -> &'static WallpaperPreset {
    WALLPAPERS
        .iter()
        .find(|preset| preset.id == id)
        .unwrap_or(&WALLPAPERS[0])
}

/// The preset after `id` in catalog order, wrapping around.
pub fn next_wallpaper_id(id: &str) -> &'static str {
    let index = WALLPAPERS
        .iter()
        .position(|preset| preset.id == id)
        .map(|index| (index + 1) % WALLPAPERS.len())
        .unwrap_or(0);
    WALLPAPERS[index].id
}
