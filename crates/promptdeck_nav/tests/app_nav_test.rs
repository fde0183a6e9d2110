use std::cell::{Cell, RefCell};

use promptdeck_common::{OrgMemberInfo, User, DEFAULT_PICTURE_URL};
use promptdeck_config::AuthConfig;
use promptdeck_nav::{
    AppNav, AuthSession, AuthState, Browser, DocumentEvent, EventKind, ListenerId, NavClick,
    OrgSelectionStore, RouteState,
};

#[derive(Default)]
struct FakeBrowser {
    path: Option<&'static str>,
    path_reads: Cell<usize>,
    reloads: Cell<usize>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, EventKind)>>,
}

impl FakeBrowser {
    fn at(path: &'static str) -> Self {
        Self {
            path: Some(path),
            ..Self::default()
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Browser for FakeBrowser {
    fn location_pathname(&self) -> Option<String> {
        self.path_reads.set(self.path_reads.get() + 1);
        self.path.map(String::from)
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn add_event_listener(&self, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, kind));
        id
    }

    fn remove_event_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(active, _)| *active != id);
    }
}

struct FakeAuth {
    state: AuthState,
    calls: RefCell<Vec<String>>,
}

impl FakeAuth {
    fn logged_in(picture_url: Option<&str>, org: Option<&str>) -> Self {
        Self {
            state: AuthState::LoggedIn {
                user: User {
                    user_id: "user_1".to_string(),
                    email: Some("ada@example.com".to_string()),
                    picture_url: picture_url.map(String::from),
                },
                active_org: org.map(|name| OrgMemberInfo {
                    org_id: "org_1".to_string(),
                    org_name: name.to_string(),
                    url_safe_org_name: name.to_lowercase(),
                    user_role: "Admin".to_string(),
                    inherited_user_roles_plus_current_role: vec!["Admin".to_string()],
                    user_permissions: vec![],
                }),
            },
            calls: RefCell::new(Vec::new()),
        }
    }

    fn loading() -> Self {
        Self {
            state: AuthState::Loading,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl AuthSession for FakeAuth {
    fn auth_state(&self) -> AuthState {
        self.state.clone()
    }

    fn logout(&self, redirect_on_logout: bool) {
        self.calls
            .borrow_mut()
            .push(format!("logout({})", redirect_on_logout));
    }

    fn redirect_to_account_page(&self) {
        self.calls.borrow_mut().push("account".to_string());
    }

    fn redirect_to_org_page(&self) {
        self.calls.borrow_mut().push("org".to_string());
    }
}

#[derive(Default)]
struct FakeOrgSelection {
    saved: RefCell<Vec<String>>,
}

impl OrgSelectionStore for FakeOrgSelection {
    fn save_org_selection(&self, org_id: &str) {
        self.saved.borrow_mut().push(org_id.to_string());
    }
}

fn auth_config() -> AuthConfig {
    AuthConfig {
        auth_url: "https://auth.example.com/".to_string(),
        api_key: Some("api_key".to_string()),
        verifier_key: None,
        issuer: None,
    }
}

fn nav(
    auth: FakeAuth,
    browser: FakeBrowser,
) -> AppNav<FakeAuth, FakeOrgSelection, FakeBrowser> {
    AppNav::new(&auth_config(), auth, FakeOrgSelection::default(), browser)
}

#[test]
fn test_outside_click_closes_menu() {
    let mut nav = nav(FakeAuth::logged_in(None, Some("Acme")), FakeBrowser::at("/app"));
    nav.mount();

    nav.toggle_menu();
    assert!(nav.menu().is_open());
    assert_eq!(nav.browser().listener_count(), 2);

    nav.handle_document_event(&DocumentEvent::Click { inside_menu: false });
    assert!(!nav.menu().is_open());
    assert_eq!(nav.browser().listener_count(), 0);
}

#[test]
fn test_escape_closes_menu() {
    let mut nav = nav(FakeAuth::logged_in(None, None), FakeBrowser::at("/app"));
    nav.mount();

    nav.toggle_menu();
    nav.handle_document_event(&DocumentEvent::KeyDown {
        key: "Escape".to_string(),
    });

    assert!(!nav.menu().is_open());
    assert_eq!(nav.browser().listener_count(), 0);
}

#[test]
fn test_avatar_click_while_open_closes_menu() {
    let mut nav = nav(FakeAuth::logged_in(None, None), FakeBrowser::at("/app"));
    nav.mount();

    nav.toggle_menu();
    // The avatar lives inside the menu container, so the document listener
    // sees an inside click before the button toggles.
    nav.handle_document_event(&DocumentEvent::Click { inside_menu: true });
    assert!(nav.menu().is_open());
    nav.toggle_menu();

    assert!(!nav.menu().is_open());
    assert_eq!(nav.browser().listener_count(), 0);
}

#[test]
fn test_unmount_releases_listeners() {
    let mut nav = nav(FakeAuth::logged_in(None, None), FakeBrowser::at("/app"));
    nav.mount();
    nav.toggle_menu();
    assert_eq!(nav.browser().listener_count(), 2);

    nav.unmount();

    assert_eq!(nav.browser().listener_count(), 0);
    assert!(!nav.menu().is_open());
}

#[test]
fn test_support_badge_follows_mounted_path() {
    for (path, badge) in [
        ("/app", true),
        ("/app/prompts", true),
        ("/app/settings", true),
        ("/app/support", false),
    ] {
        let mut nav = nav(FakeAuth::logged_in(None, None), FakeBrowser::at(path));
        nav.mount();
        assert_eq!(nav.show_support_badge(), badge, "path: {}", path);

        let support = nav
            .rendered_links(&RouteState::at(path))
            .into_iter()
            .find(|link| link.label == "Support")
            .unwrap();
        assert_eq!(support.badge, badge, "path: {}", path);
    }
}

#[test]
fn test_badge_shown_before_mount() {
    let nav = nav(FakeAuth::logged_in(None, None), FakeBrowser::at("/app/support"));
    assert_eq!(nav.path(), None);
    assert!(nav.show_support_badge());
}

#[test]
fn test_path_is_read_once() {
    let mut nav = nav(FakeAuth::logged_in(None, None), FakeBrowser::at("/app/prompts"));
    nav.mount();
    nav.mount();

    assert_eq!(nav.path(), Some("/app/prompts"));
    assert_eq!(nav.browser().path_reads.get(), 1);
}

#[test]
fn test_switch_organization_clears_selection_and_reloads() {
    let nav = nav(FakeAuth::logged_in(None, Some("Acme")), FakeBrowser::at("/app"));

    nav.switch_organization();

    assert_eq!(*nav.org_selection().saved.borrow(), vec![String::new()]);
    assert_eq!(nav.browser().reloads.get(), 1);
}

#[test]
fn test_sign_out_redirects() {
    let nav = nav(FakeAuth::logged_in(None, None), FakeBrowser::at("/app"));

    nav.sign_out();

    assert_eq!(*nav.auth().calls.borrow(), vec!["logout(true)".to_string()]);
}

#[test]
fn test_account_and_org_clicks_use_redirects() {
    let nav = nav(FakeAuth::logged_in(None, Some("Acme")), FakeBrowser::at("/app"));

    let mut account_click = NavClick::new();
    nav.open_account_page(&mut account_click);
    let mut org_click = NavClick::new();
    nav.open_org_page(&mut org_click);

    assert!(account_click.default_prevented());
    assert!(org_click.default_prevented());
    assert_eq!(
        *nav.auth().calls.borrow(),
        vec!["account".to_string(), "org".to_string()]
    );
    assert_eq!(nav.account_href(), "https://auth.example.com/account");
    assert_eq!(nav.org_href(), "https://auth.example.com/org");
}

#[test]
fn test_picture_falls_back_to_default() {
    let loading = nav(FakeAuth::loading(), FakeBrowser::default());
    assert_eq!(loading.picture_url(), DEFAULT_PICTURE_URL);

    let no_picture = nav(FakeAuth::logged_in(None, None), FakeBrowser::default());
    assert_eq!(no_picture.picture_url(), DEFAULT_PICTURE_URL);

    let with_picture = nav(
        FakeAuth::logged_in(Some("https://cdn.example.com/ada.png"), None),
        FakeBrowser::default(),
    );
    assert_eq!(with_picture.picture_url(), "https://cdn.example.com/ada.png");
}

#[test]
fn test_render_shows_team_link_only_with_active_org() {
    let route = RouteState::at("/app/settings");

    let with_org = nav(FakeAuth::logged_in(None, Some("Acme")), FakeBrowser::at("/app/settings"));
    let html = with_org.render(&route).unwrap();
    assert!(html.contains("Your Team (Acme)"));
    assert!(html.contains(" hidden>"));
    assert!(html.contains("border-gray-800"));

    let without_org = nav(FakeAuth::logged_in(None, None), FakeBrowser::at("/app/settings"));
    let html = without_org.render(&route).unwrap();
    assert!(!html.contains("Your Team"));
    assert!(html.contains("Switch Organization"));
    assert!(html.contains("Sign out"));
}

#[test]
fn test_render_reflects_open_menu() {
    let mut nav = nav(FakeAuth::logged_in(None, None), FakeBrowser::at("/app"));
    nav.mount();
    nav.toggle_menu();

    let html = nav.render(&RouteState::at("/app")).unwrap();

    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(!html.contains(" hidden>"));
}
