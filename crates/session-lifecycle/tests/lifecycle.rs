//! End-to-end session lifecycle: sign up, restart, sign out, restart.

use auth_client::{IdentityProvider, ProviderError, SubjectId};
use session_lifecycle::{SessionController, StartDestination};
use session_store::{FileStore, SessionVault};
use std::path::Path;

/// Provider that hands out a fixed subject id.
struct FixedProvider(&'static str);

impl IdentityProvider for FixedProvider {
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

fn controller_at(path: &Path, subject: &'static str) -> SessionController<FixedProvider> {
    let vault = SessionVault::new(Box::new(FileStore::open(path).unwrap()));
    SessionController::new(FixedProvider(subject), vault)
}

#[tokio::test]
async fn remembered_session_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    // First run: nothing remembered, user signs up with remember-me
    {
        let controller = controller_at(&path, "subject-1");
        assert_eq!(
            controller.determine_initial_destination(),
            StartDestination::SignIn
        );
        controller
            .sign_up("a@b.com", "Str0ng!Pass", true)
            .await
            .unwrap();
    }

    // Second run: the remembered session routes straight to home
    {
        let controller = controller_at(&path, "subject-1");
        assert_eq!(
            controller.determine_initial_destination(),
            StartDestination::Home
        );
        assert_eq!(
            controller.remembered_subject().unwrap(),
            Some(SubjectId::from("subject-1"))
        );

        // The user logs out from home
        controller.sign_out().await.unwrap();
    }

    // Third run: logout cleared the session, back to sign-in
    {
        let controller = controller_at(&path, "subject-1");
        assert_eq!(
            controller.determine_initial_destination(),
            StartDestination::SignIn
        );
        assert_eq!(controller.remembered_subject().unwrap(), None);
    }
}

#[tokio::test]
async fn sign_in_without_remember_me_does_not_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let controller = controller_at(&path, "subject-2");
        controller.determine_initial_destination();
        controller.sign_in("a@b.com", "pw", false).await.unwrap();
    }

    let controller = controller_at(&path, "subject-2");
    assert_eq!(
        controller.determine_initial_destination(),
        StartDestination::SignIn
    );
}
