//! # GrubDash
//!
//! An in-memory dishes and orders API.
//!
//! - **[model]**: the `Dish` and `Order` resources and their create/update payloads
//! - **[dish_actor]**, **[order_actor]**: entity rules and factories for the two repositories
//! - **[clients]**: typed handles the HTTP layer uses to reach the repositories
//! - **[lifecycle]**: starts and stops the actors ([`GrubDashSystem`](lifecycle::GrubDashSystem))
//! - **[api]**: the axum router, the validation pipelines and the route handlers
//!
//! Every request runs its checks in order and stops at the first failure; mutations
//! only reach a repository once all checks have passed.

pub mod api;
pub mod arguments;
pub mod clients;
pub mod dish_actor;
pub mod ids;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod seed;
