//! Process-local webinar store.
//!
//! Backs unit tests and database-less runs. State lives only as long as the
//! repository value and is shared by cloning the surrounding `Arc`.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{WebinarRepository, WebinarRepositoryError};
use crate::domain::{Webinar, WebinarId};

/// In-memory implementation of the [`WebinarRepository`] port.
///
/// Reads hand out copies, so mutating a fetched webinar has no effect until
/// it is written back through [`WebinarRepository::update`].
///
/// # Examples
/// ```
/// use webinars::domain::ports::WebinarRepository;
/// use webinars::outbound::memory::InMemoryWebinarRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryWebinarRepository::default();
/// let id = webinars::domain::WebinarId::new("w1").expect("id");
/// assert!(repo.find_by_id(&id).await.expect("lookup").is_none());
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryWebinarRepository {
    webinars: Mutex<HashMap<WebinarId, Webinar>>,
}

impl InMemoryWebinarRepository {
    /// Create a repository pre-populated with `seed`.
    ///
    /// Later entries replace earlier ones sharing the same identifier.
    pub fn new(seed: impl IntoIterator<Item = Webinar>) -> Self {
        let webinars = seed
            .into_iter()
            .map(|webinar| (webinar.id().clone(), webinar))
            .collect();
        Self {
            webinars: Mutex::new(webinars),
        }
    }

    /// Snapshot of every stored webinar, in no particular order.
    pub fn snapshot(&self) -> Vec<Webinar> {
        self.lock().values().cloned().collect()
    }

    // A panic while holding the lock cannot leave a half-written entry, so a
    // poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<WebinarId, Webinar>> {
        self.webinars
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl WebinarRepository for InMemoryWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let mut webinars = self.lock();
        if webinars.contains_key(webinar.id()) {
            return Err(WebinarRepositoryError::query(format!(
                "webinar {} already exists",
                webinar.id()
            )));
        }
        webinars.insert(webinar.id().clone(), webinar.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, WebinarRepositoryError> {
        Ok(self.lock().get(id).cloned())
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let mut webinars = self.lock();
        let Some(stored) = webinars.get_mut(webinar.id()) else {
            return Err(WebinarRepositoryError::query(format!(
                "webinar {} not found for update",
                webinar.id()
            )));
        };
        *stored = webinar.clone();
        Ok(())
    }
}
