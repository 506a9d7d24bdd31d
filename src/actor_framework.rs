use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Upper bound on id draws before a create is rejected.
const MAX_ID_ATTEMPTS: usize = 1_000;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any stored record must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Create rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate deciding which items a `Retain` request keeps.
pub type KeepFn<T> = Box<dyn Fn(&T) -> bool + Send>;

pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Removes the item and hands it back, so only one caller can win it.
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    /// Drops every item the predicate rejects; answers with the count removed.
    Retain {
        keep: KeepFn<T>,
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let Some(id) = self.free_id() else {
                        warn!("No free id left for new item");
                        let _ = respond_to.send(Err(FrameworkError::Rejected("id space exhausted".to_string())));
                        continue;
                    };
                    match T::from_create(id.clone(), payload) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item);
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => { let _ = respond_to.send(Err(FrameworkError::Rejected(e))); }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = self.store.remove(&id).ok_or_else(|| FrameworkError::NotFound(id.to_string()));
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Retain { keep, respond_to } => {
                    let before = self.store.len();
                    self.store.retain(|_, item| keep(&*item));
                    let _ = respond_to.send(Ok(before - self.store.len()));
                }
            }
        }
        debug!("Resource actor stopped");
    }

    /// Draws ids until one is not taken yet.
    fn free_id(&mut self) -> Option<T::Id> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = (self.next_id_fn)();
            if !self.store.contains_key(&id) {
                return Some(id);
            }
            debug!(%id, "Id already taken, drawing again");
        }
        None
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Create { payload, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Delete { id, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn retain(&self, keep: impl Fn(&T) -> bool + Send + 'static) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Retain { keep: Box::new(keep), respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. TESTS
// =============================================================================
