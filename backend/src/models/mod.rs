//! Domain models for UFR calculations and feedback.
//!
//! - [`ufr`]: calculation inputs, persisted records and the safety remark
//! - [`feedback`]: messages submitted through the feedback form

#[macro_use]
mod macros;

pub mod feedback;
pub mod ufr;

define_id_type!(i64, RecordId);
define_id_type!(i64, FeedbackId);

pub use feedback::{Feedback, NewFeedback};
pub use ufr::{InputField, NewUfrRecord, RemarkKind, SubmittedValues, UfrInput, UfrRecord};
