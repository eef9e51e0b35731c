//! Outbound navigation gate.

use url::Url;

use crate::modal::{Modal, ModalController};

/// Opens URLs in a new browser tab.
pub trait TabOpener {
    fn open_in_new_tab(&self, url: &str);
}

/// Whether `link` leaves the portal. The link is resolved against the
/// portal origin the way a browser would; anything that does not resolve to
/// the portal host counts as external.
pub fn is_external(link: &str, portal_host: &str) -> bool {
    let Ok(base) = Url::parse(&format!("https://{portal_host}/")) else {
        return true;
    };
    match base.join(link.trim()) {
        Ok(target) => !target
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(portal_host)),
        Err(_) => true,
    }
}

/// Route a link click: external URLs open the warning modal, internal ones
/// open directly.
pub fn request_navigation<T: TabOpener>(
    modals: &mut ModalController,
    tabs: &T,
    url: &str,
    portal_host: &str,
) {
    if is_external(url, portal_host) {
        modals.open(Modal::ExternalLink {
            url: url.to_string(),
        });
    } else {
        tabs.open_in_new_tab(url);
    }
}

/// "Continue" on the warning: exactly one tab, modal closed.
///
/// Returns false when no external-link modal was open.
pub fn confirm_external<T: TabOpener>(modals: &mut ModalController, tabs: &T) -> bool {
    let url = match modals.current() {
        Some(Modal::ExternalLink { url }) => url.clone(),
        _ => return false,
    };
    modals.close();
    tracing::debug!(%url, "opening external link");
    tabs.open_in_new_tab(&url);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Tabs(RefCell<Vec<String>>);

    impl TabOpener for Tabs {
        fn open_in_new_tab(&self, url: &str) {
            self.0.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn external_detection() {
        assert!(is_external("https://docs.sanchogov.tools/faq", "sanchogov.tools"));
        assert!(!is_external("https://sanchogov.tools/dashboard", "sanchogov.tools"));
        assert!(!is_external("/dashboard", "sanchogov.tools"));
        assert!(!is_external("http://localhost:8080/x", "localhost"));
        assert!(!is_external("HTTPS://SanchoGov.Tools/", "sanchogov.tools"));
    }

    #[test]
    fn links_a_browser_sends_elsewhere_are_external() {
        assert!(is_external("//evil.com/x", "govtool.local"));
        assert!(is_external("https://evil.com\\@govtool.local", "govtool.local"));
        assert!(is_external("https://govtool.local.evil.com/", "govtool.local"));
        assert!(is_external("mailto:drep@govtool.local", "govtool.local"));
        assert!(is_external("http://[::1", "govtool.local"));
    }

    #[test]
    fn protocol_relative_link_waits_for_confirmation() {
        let tabs = Tabs::default();
        let mut modals = ModalController::new();
        request_navigation(&mut modals, &tabs, "//evil.com/x", "govtool.local");
        assert!(tabs.0.borrow().is_empty());
        assert!(matches!(
            modals.current(),
            Some(Modal::ExternalLink { url }) if url == "//evil.com/x"
        ));
    }

    #[test]
    fn continue_opens_one_tab() {
        let tabs = Tabs::default();
        let mut modals = ModalController::new();
        request_navigation(&mut modals, &tabs, "https://www.google.com/", "govtool.local");
        assert!(tabs.0.borrow().is_empty());
        assert!(confirm_external(&mut modals, &tabs));
        assert_eq!(tabs.0.borrow().as_slice(), ["https://www.google.com/"]);
        assert!(!modals.is_open());
        assert!(!confirm_external(&mut modals, &tabs));
    }

    #[test]
    fn cancel_opens_nothing() {
        let tabs = Tabs::default();
        let mut modals = ModalController::new();
        request_navigation(&mut modals, &tabs, "https://www.google.com/", "govtool.local");
        modals.close();
        assert!(tabs.0.borrow().is_empty());
    }
}
