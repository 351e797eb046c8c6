pub mod employees;
pub mod preferences;
pub mod shared;
pub mod shifts;
