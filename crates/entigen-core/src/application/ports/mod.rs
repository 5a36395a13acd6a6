//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `entigen-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `EntitySource`: entity model inspection
//!   - `Filesystem`: file operations
//!   - `TemplateRenderer`: template rendering
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (the CLI drives `ScaffoldService` directly)

pub mod output;

pub use output::{EntitySource, Filesystem, TemplateRenderer};
