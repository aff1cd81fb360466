// Form-field pipeline: metadata extraction, pattern classification, document
// detection, and the site-adapter overlay contract. All synchronous; nothing
// here watches the DOM — the shell re-invokes detection after mutations.

pub mod adapter;
pub mod classifier;
pub mod detect;
pub mod metadata;
