//! Form domain shared by the site UI and the submission server.
//!
//! This crate owns the careers intake wizard, the contact form, and the
//! payload handed to the mail relay. Nothing here performs I/O: the relay is
//! reached through the [`Relay`] trait so both `client` and `server` drive
//! the same state machines against their own transport.

pub mod contact;
pub mod draft;
pub mod email;
pub mod intake;
pub mod relay;
pub mod wire;

pub use contact::{ContactError, ContactField, ContactForm, ContactMessage, ContactStatus, ContactVariant};
pub use draft::{ApplicationDraft, IntakeField};
pub use email::{is_valid_email, normalize_email};
pub use intake::{INTERNSHIP_ROLE, IntakeError, IntakeForm, IntakeState, IntakeStep, internship_payload};
pub use relay::{Ack, Relay, RelayError, RelayPayload, RelayTemplate};
pub use wire::SubmitResponse;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
