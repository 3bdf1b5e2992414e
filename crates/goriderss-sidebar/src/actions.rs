//! Account actions and the navigation requests they produce.

use crate::nav::routes;
use crate::session::SessionApi;

/// Navigation request handed to the host router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Adds a history entry.
    Push(String),
    /// Overwrites the current history entry.
    Replace(String),
}

impl Navigation {
    pub fn push(path: impl Into<String>) -> Self {
        Navigation::Push(path.into())
    }

    pub fn replace(path: impl Into<String>) -> Self {
        Navigation::Replace(path.into())
    }

    pub fn path(&self) -> &str {
        match self {
            Navigation::Push(path) | Navigation::Replace(path) => path,
        }
    }
}

/// Ends the session and returns the redirect to perform afterwards.
///
/// The logout call's outcome is ignored; the result is always a replace
/// navigation to the login route.
pub async fn log_out(api: &dyn SessionApi) -> Navigation {
    let _ = api.log_out().await;
    Navigation::replace(routes::LOGIN)
}

/// Navigation for the settings shortcut.
pub fn open_settings() -> Navigation {
    Navigation::push(routes::SETTINGS)
}
