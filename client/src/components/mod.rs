//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome (header, footer, back-to-top) wraps every routed page; the
//! form components render `forms` state machines and post through
//! `net::api`.

pub mod contact_form;
pub mod footer;
pub mod header;
pub mod intake_modal;
pub mod layout;
pub mod modal;
pub mod section;
