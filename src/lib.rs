//! Portfolio Advisor Engine
//!
//! An embedded assistant that answers free-text or structured queries about
//! a trading portfolio with deterministic, pre-authored analysis text:
//! - Resolves each query to a fixed analysis intent (or the overview fallback)
//! - Synthesizes intent-specific text from a read-only portfolio snapshot
//! - Guarantees the regulatory disclaimer appears exactly once
//! - Attaches a fixed set of follow-up questions
//!
//! PIPELINE:
//! REQUEST → CLASSIFY → SYNTHESIZE → DISCLAIMER → FOLLOW-UPS → RESPONSE

pub mod api;
pub mod classifier;
pub mod compliance;
pub mod error;
pub mod models;
pub mod provider;
pub mod registry;
pub mod synthesizer;

pub use error::{AdvisorError, Result};

// Re-export common types
pub use classifier::IntentClassifier;
pub use models::*;
pub use synthesizer::Synthesizer;
