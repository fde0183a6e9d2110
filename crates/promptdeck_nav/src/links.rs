// --- File: crates/promptdeck_nav/src/links.rs ---

/// Path of the support page; the only route without a support badge.
pub const SUPPORT_PATH: &str = "/app/support";

/// A destination in the app header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub to: &'static str,
    pub label: &'static str,
    /// Active on an exact match only.
    pub end: bool,
    pub extra_class: Option<&'static str>,
}

pub const APP_NAV_LINKS: [NavLink; 4] = [
    NavLink {
        to: "/app",
        label: "Overview",
        end: true,
        extra_class: None,
    },
    NavLink {
        to: "/app/prompts",
        label: "Prompts",
        end: false,
        extra_class: None,
    },
    NavLink {
        to: "/app/settings",
        label: "Settings",
        end: false,
        extra_class: None,
    },
    NavLink {
        to: SUPPORT_PATH,
        label: "Support",
        end: false,
        extra_class: Some("flex gap-px"),
    },
];

/// Where the router is, and where it is going.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteState {
    pub location: String,
    /// Target of a navigation that has not finished loading yet.
    pub pending: Option<String>,
}

impl RouteState {
    pub fn at(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            pending: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkState {
    pub is_active: bool,
    pub is_pending: bool,
}

impl NavLink {
    /// Router matching: exact for `end` links, otherwise the link path or
    /// any path below it. Trailing slashes are ignored.
    pub fn matches(&self, path: &str) -> bool {
        let path = trim_trailing_slash(path);
        let to = trim_trailing_slash(self.to);
        if path == to {
            return true;
        }
        !self.end && path.starts_with(to) && path[to.len()..].starts_with('/')
    }

    pub fn state(&self, route: &RouteState) -> LinkState {
        LinkState {
            is_active: self.matches(&route.location),
            is_pending: route.pending.as_deref().is_some_and(|p| self.matches(p)),
        }
    }

    pub fn class(&self, route: &RouteState) -> String {
        nav_link_class(self.extra_class, self.state(route))
    }
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Class list of a header link. Empty parts are dropped.
pub fn nav_link_class(extra_class: Option<&str>, state: LinkState) -> String {
    let parts = [
        "text-gray-600 hover:text-gray-900",
        "px-2 py-1",
        "border rounded-full",
        extra_class.unwrap_or(""),
        if state.is_pending { "animate-pulse" } else { "" },
        if state.is_active || state.is_pending {
            "border-gray-800"
        } else {
            "border-transparent"
        },
    ];
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The badge is hidden on the support page only. An unknown path (no
/// window yet) shows it.
pub fn show_support_badge(path: Option<&str>) -> bool {
    path != Some(SUPPORT_PATH)
}
