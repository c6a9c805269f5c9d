//! Corporate risk diagnosis engine: deterministic, rule-based.
//!
//! Scores a completed succession / key-person risk questionnaire into weighted
//! risk percentages per category and overall, ranks the riskiest answers,
//! matches remediation solutions, and renders a consulting script.
//!
//! No DB, no network, no shared state; every call is a pure computation.

pub mod answers;
pub mod catalog;
pub mod config;
pub mod date;
pub mod engine;
pub mod error;
pub mod facts;
pub mod priority;
pub mod risk;
pub mod score;
pub mod script;
pub mod solution;
pub mod types;

pub use answers::AnswerSet;
pub use catalog::{Catalog, Category, Question, QuestionKind, QuestionOption, Solution, Trigger};
pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use facts::CompanyFacts;
pub use priority::{rank_priorities, DEFAULT_PRIORITY_LIMIT};
pub use risk::{classify, RiskLevel};
pub use score::{compute_scores, CategoryScore, ScoreSummary, ScoredItem};
pub use script::generate_script;
pub use solution::match_solutions;
pub use types::{DiagnosisReport, DiagnosisRequest};

/// Run the default engine on a parsed request (no I/O).
pub fn run(request: &DiagnosisRequest, now: chrono::NaiveDateTime) -> Result<DiagnosisReport, EngineError> {
  Engine::with_defaults().diagnose(request, now)
}
