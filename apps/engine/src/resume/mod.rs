// Résumé pipeline: normalize raw text, split into labeled sections by header
// lines, then run per-section entry extractors. Pure and total — malformed
// text produces an empty-but-valid record, never a failure.

pub mod entries;
pub mod parser;
pub mod personal;
pub mod sections;
pub mod skills;
