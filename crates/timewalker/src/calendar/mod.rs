//! Calendar-unit arithmetic and the intervals walked with it.

mod fixed;
mod interval;
mod local;
mod unit;
mod walk;


pub use interval::Interval;
pub use local::resolve_local;
pub use unit::CalendarUnit;
pub use walk::{FixedWalk, Walk};
