pub mod config;
pub mod error;
pub mod instruction;
pub mod io;
pub mod paths;
pub mod rule;

pub use error::{Result, ServiceListError};
pub use instruction::{BuildParams, DueEntry, Instruction, InstructionBuilder};
pub use rule::MaintenanceRule;
