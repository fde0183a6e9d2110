// --- File: crates/promptdeck_nav/src/shell.rs ---
use askama::Template;
use promptdeck_common::DEFAULT_PICTURE_URL;
use promptdeck_config::AuthConfig;
use tracing::{debug, info};

use crate::browser::{AuthSession, Browser, DocumentEvent, OrgSelectionStore};
use crate::error::NavError;
use crate::links::{show_support_badge, RouteState, APP_NAV_LINKS, SUPPORT_PATH};
use crate::menu::UserMenu;
use crate::render::{AppNavTemplate, OrgLink, RenderedLink};

/// A click on an anchor; handlers may cancel the browser's navigation.
#[derive(Debug, Default)]
pub struct NavClick {
    default_prevented: bool,
}

impl NavClick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The app header: destination links plus the user menu.
pub struct AppNav<A, S, B> {
    auth: A,
    org_selection: S,
    browser: B,
    auth_url: String,
    menu: UserMenu,
    path: Option<String>,
    mounted: bool,
}

impl<A, S, B> AppNav<A, S, B>
where
    A: AuthSession,
    S: OrgSelectionStore,
    B: Browser,
{
    pub fn new(config: &AuthConfig, auth: A, org_selection: S, browser: B) -> Self {
        Self {
            auth,
            org_selection,
            browser,
            auth_url: config.auth_url.trim_end_matches('/').to_string(),
            menu: UserMenu::new(),
            path: None,
            mounted: false,
        }
    }

    /// Runs once after the first render. The path is captured here and not
    /// tracked afterwards.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.path = self.browser.location_pathname();
        debug!("Navigation mounted at {:?}", self.path);
    }

    pub fn unmount(&mut self) {
        self.menu.unmount(&self.browser);
        self.mounted = false;
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn menu(&self) -> &UserMenu {
        &self.menu
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    pub fn org_selection(&self) -> &S {
        &self.org_selection
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    pub fn toggle_menu(&mut self) {
        self.menu.toggle(&self.browser);
    }

    /// Delivers a document event to whatever listeners the menu holds.
    pub fn handle_document_event(&mut self, event: &DocumentEvent) {
        self.menu.handle_document_event(&self.browser, event);
    }

    pub fn show_support_badge(&self) -> bool {
        show_support_badge(self.path())
    }

    /// Avatar image; the provider default when there is no picture or auth
    /// is still loading.
    pub fn picture_url(&self) -> String {
        self.auth
            .auth_state()
            .user()
            .map(|user| user.picture_url_or_default().to_string())
            .unwrap_or_else(|| DEFAULT_PICTURE_URL.to_string())
    }

    pub fn account_href(&self) -> String {
        format!("{}/account", self.auth_url)
    }

    pub fn org_href(&self) -> String {
        format!("{}/org", self.auth_url)
    }

    pub fn open_account_page(&self, click: &mut NavClick) {
        click.prevent_default();
        self.auth.redirect_to_account_page();
    }

    pub fn open_org_page(&self, click: &mut NavClick) {
        click.prevent_default();
        self.auth.redirect_to_org_page();
    }

    /// Forgets the selected organization and reloads so the org picker runs.
    pub fn switch_organization(&self) {
        info!("Clearing organization selection");
        self.org_selection.save_org_selection("");
        self.browser.reload();
    }

    pub fn sign_out(&self) {
        info!("Signing out");
        self.auth.logout(true);
    }

    pub fn rendered_links(&self, route: &RouteState) -> Vec<RenderedLink> {
        let badge = self.show_support_badge();
        APP_NAV_LINKS
            .iter()
            .map(|link| RenderedLink {
                href: link.to,
                label: link.label,
                class: link.class(route),
                active: link.state(route).is_active,
                badge: link.to == SUPPORT_PATH && badge,
            })
            .collect()
    }

    pub fn render(&self, route: &RouteState) -> Result<String, NavError> {
        let picture_url = self.picture_url();
        let state = self.auth.auth_state();
        let org_link = state.active_org().map(|org| OrgLink {
            href: self.org_href(),
            name: org.org_name.clone(),
        });

        let template = AppNavTemplate {
            links: self.rendered_links(route),
            picture_url: &picture_url,
            menu_open: self.menu.is_open(),
            account_href: self.account_href(),
            org_link,
        };
        Ok(template.render()?)
    }
}
