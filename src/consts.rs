//! Shared constants: element hooks, CSS values, and animation timings.

// ── Element hooks ───────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const NAVBAR_SELECTOR: &str = "nav";
pub const SCROLL_TOP_ID: &str = "scrollTop";
pub const CONFIG_SCRIPT_ID: &str = "folio-config";

pub const MODAL_ID: &str = "portfolioModal";
pub const MODAL_CLOSE_ID: &str = "modalClose";
pub const MODAL_OVERLAY_SELECTOR: &str = ".modal-overlay";
pub const MODAL_CONTENT_SELECTOR: &str = ".modal-content";
pub const MODAL_IMAGE_ID: &str = "modalImage";
pub const MODAL_CATEGORY_ID: &str = "modalCategory";
pub const MODAL_TITLE_ID: &str = "modalTitle";
pub const MODAL_DESCRIPTION_ID: &str = "modalDescription";
pub const MODAL_ACTION_ID: &str = "modalViewBtn";
/// Action slot used at or below the modal breakpoint.
pub const MODAL_ACTION_SLOT_COMPACT_ID: &str = "modalActionsMobile";
/// Action slot used above the modal breakpoint.
pub const MODAL_ACTION_SLOT_WIDE_ID: &str = "modalActionsDesktop";

pub const CATALOG_ITEM_SELECTOR: &str = ".portfolio-item";
pub const STAT_SELECTOR: &str = ".stat-number";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const HERO_TITLE_SELECTOR: &str = ".hero h1 strong";

/// Class toggled on the nav panel, modal, and active nav link.
pub const ACTIVE_CLASS: &str = "active";
/// Class toggled on the scroll-to-top control.
pub const VISIBLE_CLASS: &str = "visible";
/// Bidirectional reveal markers.
pub const REVEAL_IN_CLASS: &str = "in";
pub const REVEAL_OUT_CLASS: &str = "out";

/// Section id treated as the top of the page.
pub const HOME_SECTION_ID: &str = "home";

// ── Animation timing ────────────────────────────────────────────

/// Number of increments a stat counter takes to reach its target.
pub const COUNTER_STEPS: f64 = 50.0;
/// Interval between counter increments.
pub const COUNTER_TICK_MS: u32 = 30;

/// Initial offset for reveal-on-scroll elements.
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const REVEAL_SHOWN_TRANSFORM: &str = "translateY(0)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// ── Hamburger bars ──────────────────────────────────────────────

pub const BAR_TOP_OPEN_TRANSFORM: &str = "rotate(45deg) translateY(8px)";
pub const BAR_BOTTOM_OPEN_TRANSFORM: &str = "rotate(-45deg) translateY(-8px)";
