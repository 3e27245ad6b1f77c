//! GymTrack Engine
//!
//! Hybrid recommendation engine for the GymTrack client: produces
//! personalized workout plans and journal analyses, delegating to an
//! external language-model service when a credential is supplied and
//! falling back to deterministic local generators on any failure. Both
//! paths satisfy the same output contracts.
//!
//! ## Architecture
//!
//! - `gateway`: single-shot delegation to the generation service with
//!   contract enforcement
//! - `planner` / `journal`: the two generators (AI path + local fallback)
//! - `history`: whole-file JSON collections for locally cached history
//! - `persistence`: the remote storage collaborator surface
//! - `engine`: facade tying configuration and gateway together

pub mod config;
pub mod engine;
pub mod gateway;
pub mod history;
pub mod journal;
pub mod persistence;
pub mod planner;
pub mod telemetry;

pub use engine::Engine;
pub use gateway::{ApiCredential, DelegationGateway};
