use chrono::{DateTime, Utc};
use fxconvert_conversion::{Amount, ConversionPayload, ConversionRequest, Currency};
use serde::Serialize;

use crate::errors::{Error, Result};

/// Outcome of a single conversion call.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ConversionOutcome {
    Success { payload: ConversionPayload },
    Failure { reason: String },
}

/// One conversion attempt: what was asked, and what came back.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub request: ConversionRequest,
    pub outcome: ConversionOutcome,
    pub completed_at: DateTime<Utc>,
}

impl ConversionResult {
    pub fn success(request: ConversionRequest, payload: ConversionPayload) -> Self {
        Self {
            request,
            outcome: ConversionOutcome::Success { payload },
            completed_at: Utc::now(),
        }
    }

    pub fn failure(request: ConversionRequest, reason: impl Into<String>) -> Self {
        Self {
            request,
            outcome: ConversionOutcome::Failure {
                reason: reason.into(),
            },
            completed_at: Utc::now(),
        }
    }

    pub fn target(&self) -> &Currency {
        &self.request.target
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ConversionOutcome::Success { .. })
    }

    pub fn payload(&self) -> Option<&ConversionPayload> {
        match &self.outcome {
            ConversionOutcome::Success { payload } => Some(payload),
            ConversionOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            ConversionOutcome::Success { .. } => None,
            ConversionOutcome::Failure { reason } => Some(reason),
        }
    }

    /// [`Error::ConversionUnavailable`] describing this result, if it failed.
    pub fn error(&self) -> Option<Error> {
        self.failure_reason().map(|reason| Error::ConversionUnavailable {
            source_code: self.request.source.code().to_string(),
            target_code: self.request.target.code().to_string(),
            reason: reason.to_string(),
        })
    }

    /// Turns a failed outcome into [`Error::ConversionUnavailable`].
    ///
    /// Single-conversion callers use this to surface the failure directly.
    pub fn into_result(self) -> Result<ConversionPayload> {
        match self.outcome {
            ConversionOutcome::Success { payload } => Ok(payload),
            ConversionOutcome::Failure { reason } => Err(Error::ConversionUnavailable {
                source_code: self.request.source.code().to_string(),
                target_code: self.request.target.code().to_string(),
                reason,
            }),
        }
    }
}

/// Results of converting one source amount to an ordered list of targets.
///
/// `results` holds exactly one entry per requested target, in request order.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConversionBatch {
    pub source: Currency,
    pub amount: Amount,
    pub results: Vec<ConversionResult>,
}

impl ConversionBatch {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn targets(&self) -> impl Iterator<Item = &Currency> {
        self.results.iter().map(ConversionResult::target)
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }
}
