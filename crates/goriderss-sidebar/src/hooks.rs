//! Dioxus hooks wiring the session identity and drawer state into a view.

use dioxus::prelude::*;

use crate::drawer::DrawerState;
use crate::identity::IdentitySnapshot;
use crate::session::{load_identity, Liveness, SessionHandle};

/// Loads the session identity once per mount.
///
/// Reads the [`SessionHandle`] from context. The returned signal stays `None`
/// until a successful answer arrives, and stays `None` for good on failure.
/// Results arriving after the view unmounts are dropped.
pub fn use_session_identity() -> Signal<Option<IdentitySnapshot>> {
    let session = use_context::<SessionHandle>();
    let mut snapshot = use_signal(|| None::<IdentitySnapshot>);
    let liveness = use_hook(Liveness::new);

    use_drop({
        let liveness = liveness.clone();
        move || liveness.revoke()
    });

    use_hook(move || {
        spawn(async move {
            // load_identity checks liveness after the await; nothing suspends between
            // that check and the write below.
            if let Some(found) = load_identity(session.api(), session.file_base(), &liveness).await {
                snapshot.set(Some(found));
            }
        });
    });

    snapshot
}

/// Drawer state that closes itself whenever `current_path` changes.
pub fn use_drawer(current_path: String) -> Signal<DrawerState> {
    let mut drawer = use_signal(DrawerState::new);

    use_effect(use_reactive!(|current_path| {
        drawer.write().observe_route(&current_path);
    }));

    drawer
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::SessionError;
    use crate::identity::{MeResponse, SessionUser, FILE_BASE};
    use crate::nav::routes;
    use crate::session::tests::FakeSession;
    use crate::session::SessionApi;
    use async_trait::async_trait;
    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Notify;

    /// Renders and drains effects and tasks until the dom goes quiet.
    pub(crate) async fn settle(dom: &mut VirtualDom) {
        for _ in 0..8 {
            dom.render_immediate(&mut NoOpMutations);
            let _ = tokio::time::timeout(Duration::from_millis(20), dom.wait_for_work()).await;
        }
        dom.render_immediate(&mut NoOpMutations);
    }

    fn named(user_name: &str) -> MeResponse {
        MeResponse {
            ok: true,
            user: Some(SessionUser {
                user_name: Some(user_name.to_string()),
                ..Default::default()
            }),
        }
    }

    /// Holds the identity answer until `release` is notified.
    struct HeldSession {
        release: Arc<Notify>,
        started: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SessionApi for HeldSession {
        async fn fetch_identity(&self) -> Result<MeResponse, SessionError> {
            self.started.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(named("late"))
        }

        async fn log_out(&self) -> Result<(), SessionError> {
            Ok(())
        }
    }

    thread_local! {
        static DRAWER_HOST: RefCell<Option<(Signal<String>, Signal<DrawerState>)>> =
            const { RefCell::new(None) };
        static IDENTITY_HOST: RefCell<Option<Signal<Option<IdentitySnapshot>>>> =
            const { RefCell::new(None) };
        static UNMOUNT_HOST: RefCell<Option<(Signal<bool>, Signal<bool>)>> =
            const { RefCell::new(None) };
    }

    fn drawer_host() -> Element {
        let path = use_signal(|| routes::DASHBOARD.to_string());
        let drawer = use_drawer(path());
        use_hook(|| DRAWER_HOST.with(|host| *host.borrow_mut() = Some((path, drawer))));
        rsx! { div {} }
    }

    fn identity_host() -> Element {
        let snapshot = use_session_identity();
        use_hook(|| IDENTITY_HOST.with(|host| *host.borrow_mut() = Some(snapshot)));
        rsx! { div {} }
    }

    #[component]
    fn IdentityWatcher(applied: Signal<bool>) -> Element {
        let snapshot = use_session_identity();
        let mut applied = applied;
        use_effect(move || {
            if snapshot.read().is_some() {
                applied.set(true);
            }
        });
        rsx! { div {} }
    }

    fn unmount_host() -> Element {
        let mounted = use_signal(|| true);
        let applied = use_signal(|| false);
        use_hook(|| UNMOUNT_HOST.with(|host| *host.borrow_mut() = Some((mounted, applied))));
        rsx! {
            if mounted() {
                IdentityWatcher { applied }
            }
        }
    }

    #[tokio::test]
    async fn test_route_change_closes_drawer() {
        let mut dom = VirtualDom::new(drawer_host);
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let (mut path, mut drawer) = DRAWER_HOST.with(|host| *host.borrow()).unwrap();
        dom.in_runtime(|| drawer.write().open_drawer());
        settle(&mut dom).await;
        assert!(dom.in_runtime(|| drawer.read().is_open()));

        dom.in_runtime(|| path.set(routes::FEED.to_string()));
        settle(&mut dom).await;
        assert!(!dom.in_runtime(|| drawer.read().is_open()));

        dom.in_runtime(|| path.set(routes::GROUPS.to_string()));
        settle(&mut dom).await;
        assert!(!dom.in_runtime(|| drawer.read().is_open()));
    }

    #[tokio::test]
    async fn test_identity_applied_on_mount() {
        let api = FakeSession::answering(Some(named("asha")));
        let mut dom = VirtualDom::new(identity_host)
            .with_root_context(SessionHandle::new(Arc::new(api), FILE_BASE));
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let snapshot = IDENTITY_HOST.with(|host| *host.borrow()).unwrap();
        let user_name = dom.in_runtime(|| snapshot.read().as_ref().and_then(|s| s.user_name.clone()));
        assert_eq!(user_name.as_deref(), Some("asha"));
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_snapshot_empty() {
        let api = FakeSession::answering(None);
        let mut dom = VirtualDom::new(identity_host)
            .with_root_context(SessionHandle::new(Arc::new(api), FILE_BASE));
        dom.rebuild_in_place();
        settle(&mut dom).await;

        let snapshot = IDENTITY_HOST.with(|host| *host.borrow()).unwrap();
        assert!(dom.in_runtime(|| snapshot.read().is_none()));
    }

    #[tokio::test]
    async fn test_unmount_before_answer_discards_result() {
        let release = Arc::new(Notify::new());
        let started = Arc::new(AtomicUsize::new(0));
        let api = HeldSession {
            release: release.clone(),
            started: started.clone(),
        };
        let mut dom = VirtualDom::new(unmount_host)
            .with_root_context(SessionHandle::new(Arc::new(api), FILE_BASE));
        dom.rebuild_in_place();
        settle(&mut dom).await;
        assert_eq!(started.load(Ordering::SeqCst), 1);

        let (mut mounted, applied) = UNMOUNT_HOST.with(|host| *host.borrow()).unwrap();
        dom.in_runtime(|| mounted.set(false));
        settle(&mut dom).await;

        release.notify_one();
        settle(&mut dom).await;

        assert!(!dom.in_runtime(|| *applied.read()));
        assert_eq!(started.load(Ordering::SeqCst), 1);
    }
}
