//! Site copy and catalog data.
//!
//! DESIGN
//! ======
//! Everything here is `'static` data plus the small pure functions pages use
//! to filter or select from it (vacancy filters, project years, tab lookup).
//! Pages hold only the current selection in signals.

pub mod careers;
pub mod company;
pub mod media;
pub mod projects;
pub mod research;
pub mod services;
