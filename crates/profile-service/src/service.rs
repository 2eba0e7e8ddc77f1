//! Profile fetch service.

use crate::{collections, ClientProfile, DocumentStore, Profile, ProfileFailure};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Fetches profile documents and maps store errors into the profile-fetch
/// failure family.
///
/// No retries happen here; retry policy belongs to the caller.
pub struct ProfileService<S> {
    store: S,
}

impl<S: DocumentStore> ProfileService<S> {
    /// Create a new service over the given document store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch a patient profile by user id.
    pub async fn fetch_patient(&self, user_id: &str) -> Result<Profile, ProfileFailure> {
        self.fetch(collections::PATIENTS, user_id).await
    }

    /// Fetch a hospital profile by hospital id.
    pub async fn fetch_hospital(&self, hospital_id: &str) -> Result<ClientProfile, ProfileFailure> {
        self.fetch(collections::HOSPITALS, hospital_id).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<T, ProfileFailure> {
        debug!(collection = %collection, id = %id, "Fetching profile");

        let document = self
            .store
            .get_document(collection, id)
            .await?
            .ok_or(ProfileFailure::NotFound)?;

        serde_json::from_value(document).map_err(|e| {
            warn!(collection = %collection, id = %id, error = %e, "Profile document did not decode");
            ProfileFailure::Unknown(format!("undecodable profile document: {e}"))
        })
    }
}
