//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "plan a specification" or "run the installs".

pub mod install_service;
pub mod spec_service;

pub use install_service::InstallService;
pub use spec_service::SpecService;
