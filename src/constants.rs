// Page anchors and effect tuning constants.
//
// Selectors and class names the page markup is expected to provide live
// here, keeping magic strings out of the wiring code.

// Pinned projects section
pub const PROJECTS_SECTION_SELECTOR: &str = ".parallax-projects";
pub const PROJECTS_CONTENT_ID: &str = "projects-scroll";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card[data-project-index]";
pub const CARD_ACTIVE_CLASS: &str = "active";

// Pinned about section (translation only, no cards)
pub const ABOUT_SECTION_SELECTOR: &str = ".parallax-about";
pub const ABOUT_CONTENT_ID: &str = "about-scroll";
pub const ABOUT_VIEWPORT_SELECTOR: &str = ".about-scroll-viewport";
// The about parallax is a wide-layout effect only
pub const ABOUT_MIN_VIEWPORT_WIDTH: f64 = 900.0;

// Free-scrolling parallax layers
pub const SPEED_LAYER_SELECTOR: &str = "[data-speed]";
pub const SPEED_ATTR: &str = "data-speed";

// Tile reveal
pub const REVEAL_TILE_SELECTOR: &str = ".glass-tile, .about-glass-tile";
pub const REVEAL_VISIBLE_CLASS: &str = "visible";
// Fraction of the viewport height a tile's top must cross before it reveals
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.88;

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTR: &str = "data-theme";
pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

// Cursor follow
pub const CURSOR_SELECTOR: &str = ".cursor";

// Footer
pub const FOOTER_YEAR_ID: &str = "current-year";
