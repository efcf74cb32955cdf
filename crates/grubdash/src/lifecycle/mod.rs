//! # System Lifecycle
//!
//! Starts, wires and stops the two resource actors.
//!
//! Each actor is created together with its client, optionally preloaded with seed
//! entries, then spawned onto its own Tokio task. The clients are what the HTTP layer
//! holds; the actors are only reachable through them.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of every channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Await completion** - [`GrubDashSystem::shutdown`] joins every actor task
//!
//! Clones of the clients held elsewhere (for example by a still-running router) keep
//! their actor alive, so the server must be stopped before the system is shut down.

use crate::clients::{DishClient, OrderClient};
use crate::seed::{Seed, SeedError};
use crate::{dish_actor, order_actor};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The running dish and order repositories.
pub struct GrubDashSystem {
    pub dish_client: DishClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl GrubDashSystem {
    /// Starts both actors with empty collections.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (dish_actor, dish_client) = dish_actor::new(buffer_size);
        let (order_actor, order_client) = order_actor::new(buffer_size);

        Self {
            dish_client,
            order_client,
            handles: vec![tokio::spawn(dish_actor.run()), tokio::spawn(order_actor.run())],
        }
    }

    /// Starts both actors preloaded with the seed's entries.
    ///
    /// Fails before anything is spawned if an entry breaks the field rules
    /// ([`SeedError::Invalid`]) or the seed repeats an id within a collection
    /// ([`SeedError::Store`]).
    pub fn with_seed(buffer_size: usize, seed: Seed) -> Result<Self, SeedError> {
        seed.validate()?;
        let (dish_actor, dish_client) = dish_actor::new(buffer_size);
        let (order_actor, order_client) = order_actor::new(buffer_size);
        let dish_actor = dish_actor.with_entries(seed.dishes)?;
        let order_actor = order_actor.with_entries(seed.orders)?;

        Ok(Self {
            dish_client,
            order_client,
            handles: vec![tokio::spawn(dish_actor.run()), tokio::spawn(order_actor.run())],
        })
    }

    /// Drops the clients and waits for every actor to finish.
    ///
    /// Returns the first join error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");
        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
