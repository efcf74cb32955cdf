//! # Actor Framework
//!
//! Building blocks for keeping a collection of resources behind a single Tokio task.
//! Every collection is owned by a [`ResourceActor`], and the rest of the program talks
//! to it through a cloneable [`ResourceClient`]. Because the actor handles one request
//! at a time, callers never need a lock around the collection, even when many HTTP
//! requests mutate it concurrently.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the resource type, its DTOs and its update/delete rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - the ordered store and the message loop
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - the repository API seen by callers
//!
//! The operations are the classic repository set: `list`, `get`, `create`, `update` and
//! `delete`. Identifiers are produced by a generator injected when the actor is built,
//! so the storage never decides what an id looks like.
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u32,
//!     text: String,
//! }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] struct NoteUpdate { text: String }
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Error = NoteError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     async fn on_update(&mut self, update: NoteUpdate) -> Result<(), Self::Error> {
//!         self.text = update.text;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut counter = 0;
//!     let (actor, client) = ResourceActor::<Note>::new(10, move || {
//!         counter += 1;
//!         counter
//!     });
//!     tokio::spawn(actor.run());
//!
//!     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     assert_eq!(note.id, 1);
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations instead of a real
//! store, which makes error paths (a closed actor, an entity rejecting an update) trivial
//! to reproduce.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use crate::tracing::setup_tracing;
