//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Sweep: removes aged-out todos at configured intervals

mod sweep;

pub use sweep::spawn_sweep_task;
