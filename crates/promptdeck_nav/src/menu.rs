// --- File: crates/promptdeck_nav/src/menu.rs ---
use tracing::debug;

use crate::browser::{Browser, DocumentEvent, EventKind, ListenerId};

/// Open/closed state of the user menu.
///
/// While open, exactly one click listener and one keydown listener are
/// registered on the document. Closing (by any path) or unmounting removes
/// them again.
#[derive(Debug, Default)]
pub struct UserMenu {
    listeners: Vec<ListenerId>,
    expanded: bool,
}

impl UserMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.expanded
    }

    /// Listeners this menu currently holds.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Avatar click.
    pub fn toggle<B: Browser + ?Sized>(&mut self, browser: &B) {
        if self.expanded {
            self.close(browser);
        } else {
            self.open(browser);
        }
    }

    pub fn open<B: Browser + ?Sized>(&mut self, browser: &B) {
        if self.expanded {
            return;
        }
        self.expanded = true;
        self.listeners.push(browser.add_event_listener(EventKind::Click));
        self.listeners.push(browser.add_event_listener(EventKind::KeyDown));
        debug!("User menu opened");
    }

    pub fn close<B: Browser + ?Sized>(&mut self, browser: &B) {
        if !self.expanded {
            return;
        }
        self.expanded = false;
        self.release_listeners(browser);
        debug!("User menu closed");
    }

    /// Routes a document event to the dismissal listeners. Events arriving
    /// while closed are ignored since no listener is registered then.
    pub fn handle_document_event<B: Browser + ?Sized>(&mut self, browser: &B, event: &DocumentEvent) {
        if !self.expanded {
            return;
        }
        let dismiss = match event {
            DocumentEvent::Click { inside_menu } => !inside_menu,
            DocumentEvent::KeyDown { key } => key == "Escape",
        };
        if dismiss {
            self.close(browser);
        }
    }

    /// Component teardown.
    pub fn unmount<B: Browser + ?Sized>(&mut self, browser: &B) {
        self.expanded = false;
        self.release_listeners(browser);
    }

    fn release_listeners<B: Browser + ?Sized>(&mut self, browser: &B) {
        for id in self.listeners.drain(..) {
            browser.remove_event_listener(id);
        }
    }
}
