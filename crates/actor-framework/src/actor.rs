//! # Generic Actor Server
//!
//! `ResourceActor` owns one collection of entities and processes every request against
//! it sequentially. It is the "server" half of the Actor Model; the
//! [`ResourceClient`](crate::ResourceClient) returned alongside it is the only way in.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Attempts made to find an unused id before a create is rejected.
const MAX_ID_ATTEMPTS: usize = 8;

type IdGenerator<Id> = Box<dyn FnMut() -> Id + Send + Sync>;

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// The actor owns the state (`store`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the `store`
/// needs no `Mutex` or `RwLock`. Two HTTP requests creating a dish at the same time
/// simply queue up on the channel.
///
/// # Implementation Details
///
/// The store is a `Vec` so that `List` returns entities in insertion order. Lookups are
/// linear, which is fine for collections of menu size.
///
/// * **Create**: draws ids from the injected generator until one is unused, builds the
///   entity with `T::from_create_params`, appends it and returns a clone.
/// * **Get**: returns a clone of the entity, or `None`.
/// * **Update**: runs `on_update` against the stored entity and returns the new state.
/// * **Delete**: runs `on_delete`, then removes the entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Produces identifiers for newly created entities.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Preloads the store before the actor starts.
    ///
    /// Fails with [`FrameworkError::DuplicateId`] if two entries share an id.
    pub fn with_entries(
        mut self,
        entries: impl IntoIterator<Item = T>,
    ) -> Result<Self, FrameworkError> {
        for entry in entries {
            if self.position(entry.id()).is_some() {
                return Err(FrameworkError::DuplicateId(entry.id().to_string()));
            }
            self.store.push(entry);
        }
        Ok(self)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    fn unused_id(&mut self) -> Option<T::Id> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = (self.next_id)();
            if self.position(&id).is_none() {
                return Some(id);
            }
            warn!(%id, "Generated id already in use");
        }
        None
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Dish" instead of "grubdash::model::dish::Dish")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.store[index].clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(id) = self.unused_id() else {
                        warn!(entity_type, "Create failed: no unused id");
                        let _ = respond_to.send(Err(FrameworkError::DuplicateId(
                            "generator exhausted".to_string(),
                        )));
                        continue;
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.push(item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let item = &mut self.store[index];
                    if let Err(e) = item.on_update(update).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item.clone()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = self.store[index].on_delete().await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(index);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
