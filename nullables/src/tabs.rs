//! Nullable browser tabs.

use std::cell::RefCell;

use govtool_ui::TabOpener;

/// Records opened URLs instead of opening them.
#[derive(Default)]
pub struct NullTabs {
    opened: RefCell<Vec<String>>,
}

impl NullTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.opened.borrow().len()
    }
}

impl TabOpener for NullTabs {
    fn open_in_new_tab(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}
