//! Spring-mass hula skirt driven by versor oscillation.
//!
//! `hula` animates a ring-shaped cloth mesh. The waist swings like a hula hoop
//! under a rigid rotation built from versors (unit quaternions), and a
//! spring-mass body carries that motion down to the hem under gravity and
//! damping. Each tick is deterministic and needs no display, so the whole
//! simulation can be driven from tests.
//!
//! # Features
//!
//! - **Versor math**: `Quaternion` with Hamilton product, conjugate inverse, and point rotation
//! - **Rest mesh**: flared elliptical rings on a column-wrapped `Grid`
//! - **Swing driver**: planar or compound waist rotation with a velocity impulse into the body
//! - **Integrator**: six springs per vertex, per-row stiffness and damping, symplectic Euler
//! - **Normals**: unnormalized per-vertex normals and ready-to-draw triangle strips
//! - **Observable**: Monitor ticks via the `TickObserver` trait (optionally through `log`)
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod quaternion;
pub mod grid;
pub mod mesh;
pub mod spring;
pub mod integrator;
pub mod oscillation;
pub mod normals;
pub mod strip;
pub mod skirt;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use quaternion::{slerp, Quaternion};
pub use grid::{Grid, Neighbor};
pub use mesh::{RestState, X_RES, Y_RES};
pub use oscillation::{Oscillation, RotationMode};
pub use strip::{Strip, StripVertex};
pub use skirt::Skirt;
pub use config::SkirtConfig;
pub use observer::{TickObserver, NoOpTickObserver};
#[cfg(feature = "log")]
pub use observer::LogTickObserver;
pub use error::SkirtError;
