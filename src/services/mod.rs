pub mod employee;
pub mod shift;
pub mod shift_preference;

pub use employee::EmployeeService;
pub use shift::ShiftService;
pub use shift_preference::{MAX_UNAVAILABLE_PREFERENCES, ShiftPreferenceService};
