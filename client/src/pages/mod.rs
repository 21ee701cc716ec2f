//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page holds only its local selection state (tabs, filters, open
//! modal) in signals and reads catalog data from `content`.

pub mod about;
pub mod agreement;
pub mod careers;
pub mod contacts;
pub mod home;
pub mod media;
pub mod news;
pub mod not_found;
pub mod privacy;
pub mod projects;
pub mod research;
pub mod services;
