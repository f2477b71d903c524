//! Mocked plant-disease analysis
//!
//! Produces placeholder predictions for a submitted plant photo and records
//! the submission through a `SubmissionStore`. The hosted store stays an
//! external service; an in-memory implementation backs tests and the CLI.
//! Persistence failure is non-fatal: predictions are still returned with a
//! synthesized fallback identifier.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Mutex;
use thiserror::Error;

/// A single predicted plant issue
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Name of the suspected issue
    pub issue: String,
    /// Confidence in the 0.0-1.0 range
    pub confidence: f64,
    /// Care notes for the gardener
    pub notes: String,
}

/// Result of an analysis request
#[derive(Debug, Serialize)]
pub struct AnalysisOutcome {
    /// Predictions, highest confidence first
    pub predictions: Vec<Prediction>,
    /// Identifier of the stored submission, or a synthesized fallback
    pub submission_id: String,
    /// Why persistence failed, when it did
    pub save_error: Option<String>,
}

/// A submission to be persisted
#[derive(Debug, Clone)]
pub struct Submission {
    /// URL of the submitted photo
    pub image_url: String,
    /// Submitting user
    pub user_id: String,
    /// Predictions attached to the submission
    pub predictions: Vec<Prediction>,
    /// When the analysis ran
    pub submitted_at: DateTime<Utc>,
}

/// Errors a submission store can raise
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or rejected the write
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence seam for analysis submissions
///
/// The production store is a hosted relational service outside this crate;
/// implementations here only need to return the stored row's identifier.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persists a submission, returning its identifier
    async fn save(&self, submission: &Submission) -> Result<String, StoreError>;
}

/// In-memory submission store
#[derive(Debug, Default)]
pub struct MemoryStore {
    submissions: Mutex<Vec<Submission>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submissions saved so far
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.submissions.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Whether the store holds no submissions
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn save(&self, submission: &Submission) -> Result<String, StoreError> {
        let mut submissions = self
            .submissions
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        submissions.push(submission.clone());
        Ok(format!("mem-{}", submissions.len()))
    }
}

/// Runs the mocked analysis and records the submission
pub struct PlantAnalyzer {
    store: Box<dyn SubmissionStore>,
}

impl PlantAnalyzer {
    /// Creates an analyzer backed by the given store
    pub fn new(store: Box<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// Analyzes a submitted photo
    ///
    /// The predictions are canned placeholders until a real model is wired
    /// in. A store failure is logged and reported via `save_error` but never
    /// fails the analysis itself.
    pub async fn analyze(&self, image_url: &str, user_id: &str) -> AnalysisOutcome {
        let predictions = mock_predictions();

        let submission = Submission {
            image_url: image_url.to_string(),
            user_id: user_id.to_string(),
            predictions: predictions.clone(),
            submitted_at: Utc::now(),
        };

        match self.store.save(&submission).await {
            Ok(submission_id) => AnalysisOutcome {
                predictions,
                submission_id,
                save_error: None,
            },
            Err(err) => {
                log::warn!("Failed to persist analysis submission: {}", err);
                AnalysisOutcome {
                    predictions,
                    submission_id: fallback_submission_id(),
                    save_error: Some(err.to_string()),
                }
            }
        }
    }
}

/// Placeholder predictions until a real model is wired in
fn mock_predictions() -> Vec<Prediction> {
    vec![
        Prediction {
            issue: "Fungal leaf spot".to_string(),
            confidence: 0.72,
            notes: "Remove affected leaves and water at the base, not the foliage.".to_string(),
        },
        Prediction {
            issue: "Nitrogen deficiency".to_string(),
            confidence: 0.41,
            notes: "Yellowing older leaves suggest feeding with a balanced fertiliser."
                .to_string(),
        },
    ]
}

/// Synthesizes a submission identifier when the store is unavailable
fn fallback_submission_id() -> String {
    format!("local-{}", Utc::now().timestamp_millis())
}
