//! Sync Gateway: the permission and commit hooks for the collaborative
//! sync engine.
//!
//! The external engine maintains the operation log and content snapshots
//! itself; during its protocol it calls exactly three hook points here:
//! check a read, check a write, report a committed content change. The
//! gateway adapts those calls onto the access controller and the store
//! without exposing either — the engine never sees the internal data
//! model, only allow/deny/unavailable and an acknowledged commit.

use quill_core::{Capability, Document, DocumentId, UserId, authorize};
use quill_store::{Store, StoreError, StoreResult};

use crate::error::ApiError;

/// The minimal store surface the gateway needs.
///
/// A seam for the gateway rather than the whole `Store`: reading the
/// current access policy and touching the modification timestamp.
pub trait SyncStore {
    /// Load the document's current record, or `DocumentNotFound`.
    fn get(&self, id: DocumentId) -> impl Future<Output = StoreResult<Document>> + Send;

    /// Touch `last_modified`; false when the row no longer exists.
    fn touch(&self, id: DocumentId) -> impl Future<Output = StoreResult<bool>> + Send;
}

impl SyncStore for Store {
    async fn get(&self, id: DocumentId) -> StoreResult<Document> {
        Ok(self.get_document(id.0).await?.into())
    }

    async fn touch(&self, id: DocumentId) -> StoreResult<bool> {
        self.touch_last_modified(id.0).await
    }
}

/// Permission and commit hooks invoked by the sync engine.
#[derive(Debug, Clone)]
pub struct SyncGateway<S> {
    store: S,
}

impl<S: SyncStore> SyncGateway<S> {
    /// Create a gateway over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// May `actor` receive snapshot/step data for this document?
    ///
    /// Denial and absence are reported identically: the engine (and
    /// through it, the caller) learns only that the document is not
    /// available. A deleted document therefore looks exactly like one
    /// that never existed.
    pub async fn check_read(
        &self,
        document: DocumentId,
        actor: Option<UserId>,
    ) -> Result<(), ApiError> {
        self.check(document, actor, Capability::Read).await
    }

    /// May `actor` submit steps for this document?
    pub async fn check_write(
        &self,
        document: DocumentId,
        actor: Option<UserId>,
    ) -> Result<(), ApiError> {
        self.check(document, actor, Capability::Write).await
    }

    /// The engine durably committed a content change.
    ///
    /// The only job here is touching `last_modified` so the directory
    /// orders by real activity. Permissions were already checked by
    /// `check_write` and are not re-validated. The commit itself must
    /// never fail on our account: a failed touch is logged and swallowed,
    /// since stale metadata beats losing an already-committed edit.
    ///
    /// Returns whether the timestamp was actually updated.
    pub async fn on_commit(&self, document: DocumentId) -> bool {
        match self.store.touch(document).await {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!(document = %document, "Commit for a document with no row; skipping timestamp touch");
                false
            }
            Err(e) => {
                tracing::warn!(document = %document, error = %e, "Failed to touch last_modified after commit");
                false
            }
        }
    }

    async fn check(
        &self,
        document: DocumentId,
        actor: Option<UserId>,
        capability: Capability,
    ) -> Result<(), ApiError> {
        let Some(actor) = actor else {
            return Err(ApiError::AuthenticationRequired(
                "Sync session has no resolved actor".into(),
            ));
        };

        let record = match self.store.get(document).await {
            Ok(record) => record,
            Err(StoreError::DocumentNotFound(_)) => return Err(ApiError::unavailable(document.0)),
            Err(e) => return Err(e.into()),
        };

        if authorize(&record, actor, capability).is_allowed() {
            Ok(())
        } else {
            Err(ApiError::unavailable(document.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Mutex;

    /// In-memory stand-in for the persistent store.
    struct MemStore {
        documents: Mutex<HashMap<DocumentId, Document>>,
        fail_touch: bool,
    }

    impl MemStore {
        fn new(documents: impl IntoIterator<Item = Document>) -> Self {
            Self {
                documents: Mutex::new(documents.into_iter().map(|d| (d.id, d)).collect()),
                fail_touch: false,
            }
        }

        fn failing_touch(mut self) -> Self {
            self.fail_touch = true;
            self
        }

        fn last_modified(&self, id: DocumentId) -> chrono::DateTime<Utc> {
            self.documents.lock().unwrap()[&id].last_modified
        }
    }

    impl SyncStore for &MemStore {
        async fn get(&self, id: DocumentId) -> StoreResult<Document> {
            self.documents
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(StoreError::DocumentNotFound(id.0))
        }

        async fn touch(&self, id: DocumentId) -> StoreResult<bool> {
            if self.fail_touch {
                return Err(StoreError::ConfigError("touch unavailable".into()));
            }
            let mut documents = self.documents.lock().unwrap();
            match documents.get_mut(&id) {
                Some(doc) => {
                    doc.last_modified = doc.last_modified.max(Utc::now());
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    fn document(owner: UserId, is_public: bool, shared: &[UserId]) -> Document {
        Document {
            id: DocumentId::new(),
            title: "Plan".to_string(),
            owner,
            is_public,
            shared_with: shared.iter().copied().collect::<BTreeSet<_>>(),
            created: Utc::now() - Duration::hours(1),
            last_modified: Utc::now() - Duration::hours(1),
        }
    }

    #[tokio::test]
    async fn test_check_read_mirrors_authorize() {
        let owner = UserId::new();
        let guest = UserId::new();
        let stranger = UserId::new();
        let doc = document(owner, false, &[guest]);
        let id = doc.id;
        let store = MemStore::new([doc]);
        let gateway = SyncGateway::new(&store);

        assert!(gateway.check_read(id, Some(owner)).await.is_ok());
        assert!(gateway.check_read(id, Some(guest)).await.is_ok());
        assert!(gateway.check_read(id, Some(stranger)).await.is_err());
    }

    #[tokio::test]
    async fn test_check_write_same_tier_as_read() {
        let owner = UserId::new();
        let guest = UserId::new();
        let doc = document(owner, false, &[guest]);
        let id = doc.id;
        let store = MemStore::new([doc]);
        let gateway = SyncGateway::new(&store);

        assert!(gateway.check_write(id, Some(guest)).await.is_ok());
        assert!(gateway.check_write(id, Some(UserId::new())).await.is_err());
    }

    #[tokio::test]
    async fn test_unauthenticated_actor_always_denied() {
        let doc = document(UserId::new(), true, &[]);
        let id = doc.id;
        let store = MemStore::new([doc]);
        let gateway = SyncGateway::new(&store);

        let err = gateway.check_read(id, None).await.unwrap_err();
        assert_eq!(err.code(), "AUTHENTICATION_REQUIRED");
    }

    #[tokio::test]
    async fn test_denied_and_missing_look_identical() {
        let owner = UserId::new();
        let stranger = UserId::new();
        let doc = document(owner, false, &[]);
        let id = doc.id;
        let store = MemStore::new([doc]);
        let gateway = SyncGateway::new(&store);

        let denied = gateway.check_read(id, Some(stranger)).await.unwrap_err();
        let missing = gateway
            .check_read(DocumentId::new(), Some(stranger))
            .await
            .unwrap_err();
        assert_eq!(denied.code(), missing.code());
        assert_eq!(denied.status_code(), missing.status_code());
    }

    #[tokio::test]
    async fn test_on_commit_touches_timestamp() {
        let doc = document(UserId::new(), false, &[]);
        let id = doc.id;
        let before = doc.last_modified;
        let store = MemStore::new([doc]);
        let gateway = SyncGateway::new(&store);

        assert!(gateway.on_commit(id).await);
        assert!(store.last_modified(id) > before);
    }

    #[tokio::test]
    async fn test_on_commit_swallows_touch_failure() {
        let doc = document(UserId::new(), false, &[]);
        let id = doc.id;
        let store = MemStore::new([doc]).failing_touch();
        let gateway = SyncGateway::new(&store);

        // Must not propagate the error; the engine already committed.
        assert!(!gateway.on_commit(id).await);
    }

    #[tokio::test]
    async fn test_hooks_after_delete_uniformly_unavailable() {
        let owner = UserId::new();
        let store = MemStore::new([]);
        let gateway = SyncGateway::new(&store);
        let gone = DocumentId::new();

        assert!(gateway.check_read(gone, Some(owner)).await.is_err());
        assert!(gateway.check_write(gone, Some(owner)).await.is_err());
        assert!(!gateway.on_commit(gone).await);
    }
}
