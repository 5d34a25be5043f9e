//! Strongly typed entities of the assessment domain.
//!
//! Reference data (personas, reference tables, sections, questions and
//! persona-section mappings) is immutable once loaded into a
//! [`Catalog`](crate::catalog::Catalog). [`AssessmentConfiguration`] and
//! [`AssessmentResponses`] are request-scoped inputs supplied by callers.

mod configuration;
mod mapping;
mod persona;
mod reference;
mod response;
mod section;

pub use configuration::*;
pub use mapping::*;
pub use persona::*;
pub use reference::*;
pub use response::*;
pub use section::*;
