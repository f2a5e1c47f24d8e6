// DOM hooks for the web front-end.

/// Canvas auto-mounted by `start()` when present in the page.
pub const BACKDROP_CANVAS_ID: &str = "backdrop-canvas";

/// Class on `<html>` that signals dark mode; owned by the page's theme switcher.
pub const DARK_CLASS: &str = "dark";
