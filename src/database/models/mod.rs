mod macros;

pub mod employee;
pub mod preference;
pub mod shift;

// Re-export all models for easy importing
pub use employee::*;
pub use preference::*;
pub use shift::*;
