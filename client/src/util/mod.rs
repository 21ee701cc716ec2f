//! Browser helpers shared by layout components.

pub mod clock;
pub mod scroll;
