//! Type-safe Rust library for Assetto Corsa Competizione shared memory telemetry.
//!
//! Paddock reads the three shared memory pages ACC publishes while a session is
//! running (physics, graphics, and static) and decodes their packed binary
//! records into dynamically-typed field mappings.
//!
//! # Features
//!
//! - **Live Telemetry**: Direct shared memory access to ACC on Windows
//! - **Explicit Field Tables**: Every channel layout is a validated, testable table
//! - **Cross-platform Decoding**: Record decoding works on any platform from raw bytes
//! - **Lock-free Reads**: Best-effort snapshots matching the simulator's protocol
//!
//! # Quick Start
//!
//! Decoding a synthetic record (works on any platform):
//!
//! ```rust
//! use paddock::{Channel, Value, decode_channel};
//! use paddock::fixture::RecordFixture;
//!
//! let mut record = RecordFixture::new(Channel::Static);
//! let num_cars = Channel::Static.schema().field("numCars").unwrap();
//! record.put_i32(num_cars.offset, 24);
//!
//! let data = decode_channel(Channel::Static, record.bytes());
//! assert_eq!(data["numCars"], Value::Int(24));
//! ```
//!
//! Reading live telemetry (Windows, ACC running):
//!
//! ```rust,no_run
//! use paddock::TelemetrySession;
//!
//! fn main() -> paddock::Result<()> {
//!     let mut session = TelemetrySession::new();
//!     session.init_physics()?;
//!     let physics = session.physics_data()?;
//!     println!("speed: {:?}", physics["speed kmh"]);
//!     Ok(())
//! }
//! ```
//!
//! # Tearing
//!
//! The simulator rewrites each page at its own tick rate with no lock, event,
//! or sequence stamp shared with readers. A read can observe a page mid-update.
//! This crate preserves those best-effort semantics rather than inventing
//! synchronization the protocol does not carry; high-frequency pollers must
//! tolerate the occasional implausible value.

mod decode;
mod error;
pub mod fixture;
pub mod schema;
mod session;
pub mod types;

// Platform-specific modules
#[cfg(windows)]
mod shm;

// Core exports
pub use decode::{FieldMap, decode, decode_channel};
pub use error::{Result, TelemetryError};
pub use schema::{Channel, ChannelSchema, Field, FieldType};
pub use session::TelemetrySession;
pub use types::{Matrix, Value};

// Windows memory exports
#[cfg(windows)]
pub use shm::SharedRegion;
