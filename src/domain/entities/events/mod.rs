//! Events Entity Module

pub mod event;

pub use event::{DayOfWeek, Event};
