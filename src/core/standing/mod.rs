//! Academic-standing engine
//!
//! Pure functions over one student's result history and a course catalogue.
//! Nothing here performs I/O or keeps state between calls; every function
//! takes the full slice it needs and returns a fresh value.
//!
//! All history-walking functions share [`resolve_duplicates`] (last record
//! wins for a repeated `(session, semester, course_code)`) and the
//! chronological order from [`order_periods`].

pub mod carry_over;
pub mod gpa;
pub mod periods;
pub mod registration;
pub mod transcript;

pub use carry_over::{compute_carry_overs, tag_carry_overs_by_period, RecordKey};
pub use gpa::{cumulative_gpa, period_gpa, round2};
pub use periods::{group_by_period, order_periods, resolve_duplicates};
pub use registration::{
    validate_registration_load, RegisteredCourse, RegistrationLoad, RegistrationTier,
    MAX_REGISTRATION_UNITS,
};
pub use transcript::{build_transcript, StandingSummary, Transcript, TranscriptPeriod, TranscriptRow};
