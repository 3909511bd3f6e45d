//! Derive macros shared by the calendar, range and date types.

pub use derive_more::Display;
