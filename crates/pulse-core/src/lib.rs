//! # pulse-core
//!
//! Core domain logic for the Pulse survey administration client:
//! - [`Identity`](identity::Identity) — the authenticated principal
//! - Role classification predicates and the canonical display role
//! - The dashboard section matrix, data-load plans, and active-section rules
//! - The route table and guard decisions
//! - Collection entity structs and CLI response types
//!
//! Everything here is pure and synchronous — no I/O, no async. Network and
//! session state live in `pulse-api` and `pulse-auth`.

pub mod entities;
pub mod identity;
pub mod responses;
pub mod roles;
pub mod routes;
pub mod sections;

pub use identity::Identity;
