use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{AppError, UserProfile};

/// Where the user lands after signing out.
pub const PUBLIC_ROOT: &str = "/";

pub type SessionFuture<T> = Pin<Box<dyn Future<Output = Result<T, AppError>>>>;

/// Session capability backing [`AuthState`].
///
/// `fetch_profile` resolves to `Ok(None)` when nobody is signed in.
pub trait SessionProvider {
    fn fetch_profile(&self) -> SessionFuture<Option<UserProfile>>;
    fn sign_out(&self) -> SessionFuture<()>;
}

/// Global authentication state.
#[derive(Clone)]
pub struct AuthState {
    pub profile: Signal<Option<UserProfile>>,
    /// Set once the first profile lookup has finished, successfully or not.
    pub resolved: Signal<bool>,
    pub session: Rc<dyn SessionProvider>,
}

impl AuthState {
    pub fn new(session: Rc<dyn SessionProvider>) -> Self {
        Self {
            profile: Signal::new(None),
            resolved: Signal::new(false),
            session,
        }
    }

    /// Ask the session provider who is signed in.
    pub async fn refresh(mut self) {
        match self.session.fetch_profile().await {
            Ok(profile) => self.profile.set(profile),
            Err(err) => {
                tracing::warn!(error = %err, "could not load profile");
                self.profile.set(None);
            }
        }
        self.resolved.set(true);
    }

    pub fn clear(&mut self) {
        self.profile.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Await `sign_out`, then navigate to [`PUBLIC_ROOT`] on success.
///
/// Failures are logged and returned; nothing is navigated and the caller
/// is expected to leave the user where they are.
pub async fn complete_sign_out<F, N>(sign_out: F, navigate: N) -> Result<(), AppError>
where
    F: Future<Output = Result<(), AppError>>,
    N: FnOnce(&str),
{
    match sign_out.await {
        Ok(()) => {
            navigate(PUBLIC_ROOT);
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "Error signing out");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Counts ERROR events.
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == tracing::Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[tokio::test]
    async fn failed_sign_out_logs_one_error() {
        let errors = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(errors.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let _ = complete_sign_out(async { Err(AppError::internal("boom")) }, |_| {}).await;
        assert_eq!(errors.load(Ordering::SeqCst), 1);

        let _ = complete_sign_out(async { Ok(()) }, |_| {}).await;
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn successful_sign_out_navigates_to_root_once() {
        let visited = RefCell::new(Vec::new());
        let result = complete_sign_out(async { Ok(()) }, |path| {
            visited.borrow_mut().push(path.to_string())
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(*visited.borrow(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn failed_sign_out_stays_put() {
        let visited = RefCell::new(Vec::<String>::new());
        let result = complete_sign_out(
            async { Err(AppError::network("connection refused")) },
            |path| visited.borrow_mut().push(path.to_string()),
        )
        .await;

        assert_eq!(result, Err(AppError::network("connection refused")));
        assert!(visited.borrow().is_empty());
    }
}
