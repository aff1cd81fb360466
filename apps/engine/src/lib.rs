//! Heuristic document-understanding engine for job-application autofill.
//!
//! Two pipelines over one scoring vocabulary: a résumé parser that turns
//! free-form text into a structured [`ResumeRecord`], and a form-field
//! classifier that turns arbitrary form markup into typed
//! [`DetectedField`]s with calibrated confidence. Both are rule-based,
//! synchronous, and side-effect-free; the browser-extension shell owns
//! storage, messaging, and the act of writing values into the page.
//!
//! The shell calls exactly two entry points:
//! [`Engine::detect_fields`] and [`Engine::parse`].

pub mod catalog;
pub mod errors;
pub mod fields;
pub mod models;
pub mod resume;
pub mod session;

pub use catalog::PatternCatalog;
pub use errors::EngineError;
pub use fields::adapter::{AdapterOverlay, SiteAdapter};
pub use fields::classifier::FieldClassifier;
pub use models::field::{Category, ClassificationResult, DetectedField, FieldHandle, FieldMetadata};
pub use models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeRecord};
pub use session::{Engine, SessionContext};
