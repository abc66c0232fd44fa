//! # Store Actor
//!
//! [`StoreActor`] puts a [`CollectionStore`] behind a channel. It owns the store outright and
//! handles one request at a time, so any number of cloned [`StoreClient`]s can call in without
//! a lock around the collection. Each request runs the synchronous store operation to
//! completion (including its persistence write) before the next one is read.

use crate::framework::client::StoreClient;
use crate::framework::entity::{entity_type, CollectionEntity};
use crate::framework::message::StoreRequest;
use crate::framework::store::CollectionStore;
use crate::storage::KeyValueStorage;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The actor that serializes access to a [`CollectionStore`].
///
/// # Usage Pattern
///
/// 1. **Open** a `CollectionStore` over some storage.
/// 2. **Create**: `StoreActor::new(store, capacity)` returns the actor and its client.
/// 3. **Run**: spawn `actor.run()` and hand clones of the client to callers.
/// 4. **Stop**: drop every client; the loop ends once the channel drains.
pub struct StoreActor<T: CollectionEntity, S: KeyValueStorage> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: CollectionStore<T, S>,
}

impl<T: CollectionEntity, S: KeyValueStorage> StoreActor<T, S> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the request channel capacity; callers wait when it is full.
    pub fn new(store: CollectionStore<T, S>, buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        (actor, StoreClient::new(sender))
    }

    /// Processes requests until every client has been dropped, then returns the store.
    pub async fn run(mut self) -> CollectionStore<T, S> {
        let entity_type = entity_type::<T>();
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg);
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
        self.store
    }

    fn handle(&mut self, msg: StoreRequest<T>) {
        let entity_type = entity_type::<T>();
        match msg {
            StoreRequest::Load { respond_to } => {
                let size = self.store.load();
                let _ = respond_to.send(Ok(size));
            }
            StoreRequest::List { respond_to } => {
                debug!(entity_type, size = self.store.len(), "List");
                let _ = respond_to.send(Ok(self.store.items().to_vec()));
            }
            StoreRequest::Get { id, respond_to } => {
                let item = self.store.get_by_id(id).cloned();
                debug!(entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            StoreRequest::Add { draft, respond_to } => {
                let id = self.store.add(draft);
                let _ = respond_to.send(Ok(id));
            }
            StoreRequest::Update { item, respond_to } => {
                let replaced = self.store.update(item);
                let _ = respond_to.send(Ok(replaced));
            }
            StoreRequest::Delete { id, respond_to } => {
                let removed = self.store.delete(id);
                let _ = respond_to.send(Ok(removed));
            }
        }
    }
}
