//! Package-manager adapters: the real Conan CLI and a recording test double.

pub mod conan;
pub mod recording;

pub use conan::ConanCli;
pub use recording::RecordingRunner;
