// DOM hooks the effects bind to: selectors, ids, classes and custom properties
// shared with the page's markup and stylesheet.

// Scroll parallax
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_SPEED_ATTR: &str = "data-speed";

// Hero pointer parallax (optional section)
pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_BLOB_SELECTOR: &str = ".lights .blob";
pub const HERO_CHARACTER_SELECTOR: &str = ".character-wrap";

// Glow zone: cards, icons and the trail
pub const GLOW_ZONE_SELECTOR: &str = ".glow-zone";
pub const GLOW_CARD_SELECTOR: &str = ".glow-zone .glow-card";
pub const GLOW_ICON_SELECTOR: &str = ".glow-zone .glow-icon";
pub const GLOW_ACTIVE_CLASS: &str = "glow-active";
pub const TRAIL_DOT_CLASS: &str = "trail-light";
pub const TRAIL_SIZE_PROP: &str = "--light-size";

// Icon placement attributes
pub const ICON_POSX_ATTR: &str = "data-posx";
pub const ICON_POSY_ATTR: &str = "data-posy";
pub const ICON_ROTATE_ATTR: &str = "data-rotate";
pub const ICON_SCALE_ATTR: &str = "data-scale";

// Cursor follower
pub const CURSOR_ID: &str = "aiCursorCircle";
pub const CURSOR_REGION_ID: &str = "aiShowcase";

// Idle wiggle
pub const SHAPE_SELECTOR: &str = ".shape";
pub const WIGGLE_KEYFRAMES: &str = "wiggle";
pub const WIGGLE_ROTATE_PROP: &str = "--rotateAmount";
pub const WIGGLE_TRANSLATE_X_PROP: &str = "--translateX";
pub const WIGGLE_TRANSLATE_Y_PROP: &str = "--translateY";

// Contact popover
pub const CONTACT_ACTIVATOR_ID: &str = "contactCircle";
pub const CONTACT_OVERLAY_ID: &str = "contactOverlay";
pub const POPOVER_OPEN_CLASS: &str = "active";

// Cube
pub const CUBE_ID: &str = "cube";

// Ids that must exist before anything is mounted, in `Required` field order.
pub const REQUIRED_IDS: [&str; 5] = [
    CURSOR_ID,
    CURSOR_REGION_ID,
    CONTACT_ACTIVATOR_ID,
    CONTACT_OVERLAY_ID,
    CUBE_ID,
];
