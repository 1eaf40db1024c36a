//! Event transforms for the alarm panel dashboard widgets.

pub mod access;
pub mod mode;
pub mod v1;
pub mod v2;

pub use mode::AlarmMode;
