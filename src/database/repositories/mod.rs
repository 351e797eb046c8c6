pub mod employee;
pub mod shift;
pub mod shift_preference;

// Re-export all repositories for easy importing
pub use employee::EmployeeRepository;
pub use shift::ShiftRepository;
pub use shift_preference::ShiftPreferenceRepository;
