// --- File: crates/promptdeck_nav/src/lib.rs ---

pub mod browser;   // Document / window / auth session seams
pub mod error;     // Render errors
pub mod links;     // Destination links and their classes
pub mod menu;      // User menu open/close state
pub mod render;    // askama template
pub mod shell;     // The navigation component

pub use browser::{AuthSession, AuthState, Browser, DocumentEvent, EventKind, ListenerId, OrgSelectionStore};
pub use error::NavError;
pub use links::{nav_link_class, show_support_badge, LinkState, NavLink, RouteState, APP_NAV_LINKS};
pub use menu::UserMenu;
pub use shell::{AppNav, NavClick};
