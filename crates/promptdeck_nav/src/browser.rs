//! Seams between the navigation shell and its host.
//!
//! The shell never touches a real DOM or auth SDK; it talks to these traits
//! so the host page (or a test) decides what "reload" or "logout" means.
//! Everything here is single-threaded and event-driven, so methods take
//! `&self` and implementations use interior mutability.

use promptdeck_common::{OrgMemberInfo, User};

/// Identifies one registered document listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
}

/// An event delivered to a document listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    /// A click anywhere on the page; `inside_menu` is true when the target
    /// is contained in the user menu container (avatar button included).
    Click { inside_menu: bool },
    KeyDown { key: String },
}

impl DocumentEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DocumentEvent::Click { .. } => EventKind::Click,
            DocumentEvent::KeyDown { .. } => EventKind::KeyDown,
        }
    }
}

/// Window and document access.
pub trait Browser {
    /// `window.location.pathname`, or `None` when there is no window
    /// (server-side rendering).
    fn location_pathname(&self) -> Option<String>;

    /// Full page reload.
    fn reload(&self);

    fn add_event_listener(&self, kind: EventKind) -> ListenerId;

    fn remove_event_listener(&self, id: ListenerId);
}

/// What the auth provider currently knows about the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    LoggedIn {
        user: User,
        active_org: Option<OrgMemberInfo>,
    },
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Loading => None,
            AuthState::LoggedIn { user, .. } => Some(user),
        }
    }

    pub fn active_org(&self) -> Option<&OrgMemberInfo> {
        match self {
            AuthState::Loading => None,
            AuthState::LoggedIn { active_org, .. } => active_org.as_ref(),
        }
    }
}

/// The subset of the auth provider client the shell calls.
pub trait AuthSession {
    fn auth_state(&self) -> AuthState;

    fn logout(&self, redirect_on_logout: bool);

    fn redirect_to_account_page(&self);

    fn redirect_to_org_page(&self);
}

/// Persisted organization selection (local storage in the browser).
pub trait OrgSelectionStore {
    /// Saves `org_id` as the selected organization; `""` clears it.
    fn save_org_selection(&self, org_id: &str);
}
