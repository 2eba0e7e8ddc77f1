//! Session controller orchestrating the auth service and the session vault.

use crate::fsm::{
    SessionMachine, SessionMachineInput, SessionState, SessionStateChangedPayload,
};
use crate::SessionReadFailure;
use auth_client::{
    AuthService, IdentityProvider, LogoutFailure, SignInFailure, SignUpFailure, SubjectId,
};
use session_store::SessionVault;
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Where the app should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDestination {
    /// No usable remembered session; show the sign-in screen.
    SignIn,
    /// A remembered session exists; go straight to home.
    Home,
}

/// Policy for a vault write that fails after a successful authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RememberWritePolicy {
    /// Log and swallow: authentication still succeeds, the session just
    /// won't survive a restart.
    #[default]
    BestEffort,
    /// Treat the sign-in/sign-up as failed.
    Required,
}

/// Callback type for session state change notifications.
pub type SessionStateCallback = Box<dyn Fn(SessionStateChangedPayload) + Send + Sync>;

/// Session controller with FSM-based state tracking.
///
/// The FSM tracks transient states (authenticating, logging out) that aren't
/// persisted, while the remembered session itself lives in the vault. Vault
/// mutations are applied in the order the calls are issued; the UI is
/// expected to serialize user actions per screen instance.
pub struct SessionController<P: IdentityProvider> {
    auth: AuthService<P>,
    vault: SessionVault,
    /// Internal FSM for tracking session state transitions.
    fsm: Mutex<SessionMachine>,
    remember_policy: RememberWritePolicy,
    /// Optional callback for state change notifications.
    state_callback: Mutex<Option<SessionStateCallback>>,
}

impl<P: IdentityProvider> SessionController<P> {
    /// Create a new controller with the default remember-write policy.
    pub fn new(provider: P, vault: SessionVault) -> Self {
        Self::with_remember_policy(provider, vault, RememberWritePolicy::default())
    }

    /// Create a new controller with an explicit remember-write policy.
    pub fn with_remember_policy(
        provider: P,
        vault: SessionVault,
        remember_policy: RememberWritePolicy,
    ) -> Self {
        Self {
            auth: AuthService::new(provider),
            vault,
            fsm: Mutex::new(SessionMachine::new()),
            remember_policy,
            state_callback: Mutex::new(None),
        }
    }

    /// Set a callback to be notified of session state changes.
    pub fn set_state_callback(&self, callback: SessionStateCallback) {
        let mut cb = self.state_callback.lock().unwrap();
        *cb = Some(callback);
    }

    /// Get the current FSM state.
    pub fn state(&self) -> SessionState {
        let fsm = self.fsm.lock().unwrap();
        SessionState::from(fsm.state())
    }

    /// Transition the FSM and notify the callback if the state changed.
    fn transition(&self, input: &SessionMachineInput) -> Result<SessionState, String> {
        let mut fsm = self.fsm.lock().unwrap();
        let old_state = SessionState::from(fsm.state());

        fsm.consume(input)
            .map_err(|_| format!("cannot apply {:?} in state {:?}", input, fsm.state()))?;

        let new_state = SessionState::from(fsm.state());
        drop(fsm);

        if old_state != new_state {
            debug!(
                old_state = ?old_state,
                new_state = ?new_state,
                "Session state transition"
            );
            self.notify_state_change(&new_state);
        }

        Ok(new_state)
    }

    /// Notify the callback of a state change.
    fn notify_state_change(&self, state: &SessionState) {
        let cb = self.state_callback.lock().unwrap();
        if let Some(callback) = cb.as_ref() {
            let subject_id = self
                .vault
                .read()
                .ok()
                .filter(|s| s.remember_me)
                .and_then(|s| s.subject_id);

            callback(SessionStateChangedPayload {
                state: state.clone(),
                subject_id,
            });
        }
    }

    /// Decide the app's start destination.
    ///
    /// This is the one point where startup gates on an I/O result: it reads
    /// the vault once and blocks screen selection until the read completes. A
    /// read failure fails closed toward re-authentication, never toward
    /// trusting an unreadable session.
    pub fn determine_initial_destination(&self) -> StartDestination {
        match self.vault.read() {
            Ok(session) if session.remember_me => {
                info!(
                    subject_id = ?session.subject_id,
                    "Remembered session found, starting at home"
                );
                let _ = self.transition(&SessionMachineInput::RememberedSession);
                StartDestination::Home
            }
            Ok(_) => {
                info!("No remembered session, starting at sign-in");
                let _ = self.transition(&SessionMachineInput::NoRememberedSession);
                StartDestination::SignIn
            }
            Err(e) => {
                warn!(error = %e, "Session read failed, failing closed to sign-in");
                let _ = self.transition(&SessionMachineInput::NoRememberedSession);
                StartDestination::SignIn
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// Uses the FSM to track the operation:
    /// - `NotRemembered`/`Remembered`/`LoggedOut` -> `Authenticating` -> (`Authenticated` | `NotRemembered`)
    ///
    /// On success with `remember_me`, the session is persisted; what a failed
    /// vault write does is governed by the controller's
    /// [`RememberWritePolicy`].
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<SubjectId, SignInFailure> {
        self.transition(&SessionMachineInput::SignInAttempt)
            .map_err(SignInFailure::Unknown)?;

        let subject_id = match self.auth.sign_in(email, password).await {
            Ok(subject_id) => subject_id,
            Err(e) => {
                let _ = self.transition(&SessionMachineInput::AuthFailed);
                return Err(e);
            }
        };

        if remember_me {
            if let Err(e) = self.persist_remembered(&subject_id) {
                let _ = self.transition(&SessionMachineInput::AuthFailed);
                return Err(SignInFailure::Unknown(e));
            }
        }

        let _ = self.transition(&SessionMachineInput::AuthSucceeded);
        Ok(subject_id)
    }

    /// Sign up with email and password.
    ///
    /// Same shape as [`sign_in`](Self::sign_in), using the sign-up failure
    /// family.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<SubjectId, SignUpFailure> {
        self.transition(&SessionMachineInput::SignInAttempt)
            .map_err(SignUpFailure::Unknown)?;

        let subject_id = match self.auth.sign_up(email, password).await {
            Ok(subject_id) => subject_id,
            Err(e) => {
                let _ = self.transition(&SessionMachineInput::AuthFailed);
                return Err(e);
            }
        };

        if remember_me {
            if let Err(e) = self.persist_remembered(&subject_id) {
                let _ = self.transition(&SessionMachineInput::AuthFailed);
                return Err(SignUpFailure::Unknown(e));
            }
        }

        let _ = self.transition(&SessionMachineInput::AuthSucceeded);
        Ok(subject_id)
    }

    /// Persist the remembered session, honoring the remember-write policy.
    ///
    /// Returns `Err` only when the policy says the failure must surface.
    fn persist_remembered(&self, subject_id: &SubjectId) -> Result<(), String> {
        match self.vault.remember(subject_id.as_str()) {
            Ok(()) => Ok(()),
            Err(e) => match self.remember_policy {
                RememberWritePolicy::BestEffort => {
                    warn!(
                        error = %e,
                        "Failed to persist remembered session; it will not survive restart"
                    );
                    Ok(())
                }
                RememberWritePolicy::Required => {
                    Err(format!("failed to persist remembered session: {e}"))
                }
            },
        }
    }

    /// Log out.
    ///
    /// Calls the provider sign-out first; only on success is the persisted
    /// session cleared. A provider failure leaves persistence untouched.
    pub async fn sign_out(&self) -> Result<(), LogoutFailure> {
        // Tolerate being called outside a live session; the vault is still
        // cleared if the provider sign-out succeeds.
        let _ = self.transition(&SessionMachineInput::SignOutRequested);

        if let Err(e) = self.auth.sign_out().await {
            let _ = self.transition(&SessionMachineInput::SignOutFailed);
            return Err(e);
        }

        if let Err(e) = self.vault.clear() {
            let _ = self.transition(&SessionMachineInput::SignOutSucceeded);
            return Err(LogoutFailure::Unknown(format!(
                "signed out, but clearing the remembered session failed: {e}"
            )));
        }

        let _ = self.transition(&SessionMachineInput::SignOutSucceeded);
        info!("Logged out");
        Ok(())
    }

    /// The remembered subject, if a remembered session exists.
    pub fn remembered_subject(&self) -> Result<Option<SubjectId>, SessionReadFailure> {
        let session = self
            .vault
            .read()
            .map_err(|e| SessionReadFailure::Unknown(e.to_string()))?;
        Ok(session
            .subject_id
            .filter(|_| session.remember_me)
            .map(SubjectId::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_client::ProviderError;
    use session_store::{MemoryStore, SessionStore, StoreError, StoreResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Provider that always succeeds with a fixed subject.
    struct OkProvider(&'static str);

    impl IdentityProvider for OkProvider {
        async fn sign_up(&self, _: &str, _: &str) -> Result<SubjectId, ProviderError> {
            Ok(SubjectId::from(self.0))
        }

        async fn sign_in(&self, _: &str, _: &str) -> Result<SubjectId, ProviderError> {
            Ok(SubjectId::from(self.0))
        }

        async fn sign_out(&self) -> Result<(), ProviderError> {
            Ok(())
        }
    }

    /// Provider that always fails with a fixed error.
    struct ErrProvider(ProviderError);

    impl IdentityProvider for ErrProvider {
        async fn sign_up(&self, _: &str, _: &str) -> Result<SubjectId, ProviderError> {
            Err(self.0.clone())
        }

        async fn sign_in(&self, _: &str, _: &str) -> Result<SubjectId, ProviderError> {
            Err(self.0.clone())
        }

        async fn sign_out(&self) -> Result<(), ProviderError> {
            Err(self.0.clone())
        }
    }

    /// Store whose reads and writes always fail.
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn set(&self, _: &str, _: &str) -> StoreResult<()> {
            Err(StoreError::Backend("store unavailable".into()))
        }

        fn get(&self, _: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Backend("store unavailable".into()))
        }

        fn delete(&self, _: &str) -> StoreResult<bool> {
            Err(StoreError::Backend("store unavailable".into()))
        }
    }

    fn memory_vault() -> SessionVault {
        SessionVault::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn initial_state_is_unknown() {
        let controller = SessionController::new(OkProvider("u1"), memory_vault());
        assert_eq!(controller.state(), SessionState::Unknown);
    }

    #[test]
    fn startup_with_nothing_persisted_goes_to_sign_in() {
        let controller = SessionController::new(OkProvider("u1"), memory_vault());
        assert_eq!(
            controller.determine_initial_destination(),
            StartDestination::SignIn
        );
        assert_eq!(controller.state(), SessionState::NotRemembered);
    }

    #[test]
    fn startup_with_remembered_session_goes_to_home() {
        let vault = memory_vault();
        vault.remember("u1").unwrap();

        let controller = SessionController::new(OkProvider("u1"), vault);
        assert_eq!(
            controller.determine_initial_destination(),
            StartDestination::Home
        );
        assert_eq!(controller.state(), SessionState::Remembered);
        assert_eq!(
            controller.remembered_subject().unwrap(),
            Some(SubjectId::from("u1"))
        );
    }

    #[test]
    fn unreadable_session_fails_closed_to_sign_in() {
        let controller =
            SessionController::new(OkProvider("u1"), SessionVault::new(Box::new(BrokenStore)));
        assert_eq!(
            controller.determine_initial_destination(),
            StartDestination::SignIn
        );
    }

    #[tokio::test]
    async fn sign_in_with_remember_me_persists_the_session() {
        let controller = SessionController::new(OkProvider("user-1"), memory_vault());
        controller.determine_initial_destination();

        let subject = controller.sign_in("a@b.com", "pw", true).await.unwrap();
        assert_eq!(subject.as_str(), "user-1");
        assert_eq!(controller.state(), SessionState::Authenticated);
        assert_eq!(
            controller.remembered_subject().unwrap(),
            Some(SubjectId::from("user-1"))
        );
    }

    #[tokio::test]
    async fn sign_in_without_remember_me_persists_nothing() {
        let controller = SessionController::new(OkProvider("user-1"), memory_vault());
        controller.determine_initial_destination();

        controller.sign_in("a@b.com", "pw", false).await.unwrap();
        assert_eq!(controller.state(), SessionState::Authenticated);
        assert_eq!(controller.remembered_subject().unwrap(), None);
    }

    #[tokio::test]
    async fn failed_sign_in_surfaces_the_failure_and_resets_state() {
        let controller = SessionController::new(
            ErrProvider(ProviderError::InvalidCredentials),
            memory_vault(),
        );
        controller.determine_initial_destination();

        let err = controller.sign_in("a@b.com", "wrong", true).await.unwrap_err();
        assert_eq!(err, SignInFailure::InvalidCredentials);
        assert_eq!(controller.state(), SessionState::NotRemembered);
        assert_eq!(controller.remembered_subject().unwrap(), None);
    }

    #[tokio::test]
    async fn sign_up_with_remember_me_persists_the_new_subject() {
        let controller = SessionController::new(OkProvider("new-user"), memory_vault());
        controller.determine_initial_destination();

        let subject = controller
            .sign_up("a@b.com", "Str0ng!Pass", true)
            .await
            .unwrap();
        assert_eq!(subject.as_str(), "new-user");
        assert_eq!(
            controller.remembered_subject().unwrap(),
            Some(SubjectId::from("new-user"))
        );
    }

    #[tokio::test]
    async fn sign_up_failure_uses_the_sign_up_family() {
        let controller =
            SessionController::new(ErrProvider(ProviderError::AccountExists), memory_vault());
        controller.determine_initial_destination();

        let err = controller
            .sign_up("a@b.com", "Str0ng!Pass", true)
            .await
            .unwrap_err();
        assert_eq!(err, SignUpFailure::AccountAlreadyExists);
    }

    #[tokio::test]
    async fn best_effort_policy_swallows_a_failed_remember_write() {
        let controller = SessionController::with_remember_policy(
            OkProvider("user-1"),
            SessionVault::new(Box::new(BrokenStore)),
            RememberWritePolicy::BestEffort,
        );
        controller.determine_initial_destination();

        // Authentication still succeeds; the session just won't survive restart
        let subject = controller.sign_in("a@b.com", "pw", true).await.unwrap();
        assert_eq!(subject.as_str(), "user-1");
        assert_eq!(controller.state(), SessionState::Authenticated);
    }

    #[tokio::test]
    async fn required_policy_surfaces_a_failed_remember_write() {
        let controller = SessionController::with_remember_policy(
            OkProvider("user-1"),
            SessionVault::new(Box::new(BrokenStore)),
            RememberWritePolicy::Required,
        );
        controller.determine_initial_destination();

        let err = controller.sign_in("a@b.com", "pw", true).await.unwrap_err();
        assert!(matches!(err, SignInFailure::Unknown(_)));
        assert_eq!(controller.state(), SessionState::NotRemembered);
    }

    #[tokio::test]
    async fn logout_clears_the_remembered_session() {
        let vault = memory_vault();
        vault.remember("u1").unwrap();

        let controller = SessionController::new(OkProvider("u1"), vault);
        controller.determine_initial_destination();

        controller.sign_out().await.unwrap();
        assert_eq!(controller.state(), SessionState::LoggedOut);
        assert_eq!(controller.remembered_subject().unwrap(), None);
    }

    #[tokio::test]
    async fn failed_provider_sign_out_leaves_persistence_untouched() {
        let vault = memory_vault();
        vault.remember("u1").unwrap();

        let controller = SessionController::new(
            ErrProvider(ProviderError::Unclassified("boom".into())),
            vault,
        );
        controller.determine_initial_destination();

        let err = controller.sign_out().await.unwrap_err();
        assert!(matches!(err, LogoutFailure::Unknown(_)));
        // The remembered session is still there
        assert_eq!(
            controller.remembered_subject().unwrap(),
            Some(SubjectId::from("u1"))
        );
    }

    #[tokio::test]
    async fn state_callback_fires_on_transitions() {
        let controller = SessionController::new(OkProvider("u1"), memory_vault());
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        controller.set_state_callback(Box::new(move |_payload| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        }));

        controller.determine_initial_destination();
        controller.sign_in("a@b.com", "pw", false).await.unwrap();

        // Unknown -> NotRemembered, -> Authenticating, -> Authenticated
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
