//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case "scaffold CRUD sources for one entity".

pub mod file_writer;
pub mod layout_resolver;
pub mod scaffold_service;

pub use file_writer::FileWriter;
pub use layout_resolver::LayoutResolver;
pub use scaffold_service::ScaffoldService;
