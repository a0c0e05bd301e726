//! webjasa-common — Shared types, errors, and page state used by the WebJasa site.

pub mod error;
pub mod faq;
pub mod contact;
pub mod intake;

// Re-export commonly used types
pub use error::{Result, SiteError};
pub use faq::Accordion;
pub use contact::{Acknowledgment, ContactField, ContactForm, Inquiry};
pub use intake::{InquirySink, LogInquirySink};
