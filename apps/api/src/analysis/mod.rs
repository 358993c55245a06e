// Résumé Scoring Engine.
// Pure, synchronous heuristics over extracted text: five category scorers,
// aggregation, ATS sub-score, keyword report, recommendations, fallback.
// No I/O and no shared state — safe to call concurrently from any handler.

pub mod ats;
pub mod content;
pub mod engine;
pub mod fallback;
pub mod handlers;
pub mod impact;
pub mod keyword_report;
pub mod keywords;
pub mod recommendations;
pub mod report;
pub mod skills;
pub mod structure;
pub mod text;
pub mod vocab;
