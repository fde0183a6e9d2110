// --- File: crates/promptdeck_nav/src/render.rs ---
use askama::Template;

/// A header link ready for the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLink {
    pub href: &'static str,
    pub label: &'static str,
    pub class: String,
    pub active: bool,
    pub badge: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgLink {
    pub href: String,
    pub name: String,
}

#[derive(Template)]
#[template(path = "app_nav.html")]
pub struct AppNavTemplate<'a> {
    pub links: Vec<RenderedLink>,
    pub picture_url: &'a str,
    pub menu_open: bool,
    pub account_href: String,
    pub org_link: Option<OrgLink>,
}
