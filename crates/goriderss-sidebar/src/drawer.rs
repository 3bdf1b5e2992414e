//! Open/closed state of the mobile navigation drawer.

/// Mobile drawer state. Starts closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
    last_path: Option<String>,
}

impl DrawerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open_drawer(&mut self) {
        self.open = true;
    }

    pub fn close_drawer(&mut self) {
        self.open = false;
    }

    /// Records the current route and closes the drawer if it changed.
    ///
    /// The first path observed only sets the baseline.
    pub fn observe_route(&mut self, path: &str) {
        match &self.last_path {
            Some(last) if last == path => {}
            Some(_) => {
                self.open = false;
                self.last_path = Some(path.to_string());
            }
            None => self.last_path = Some(path.to_string()),
        }
    }
}
