//! Documented policy defaults. A missing profile resolves to exactly these.

use crate::models::Decision;

use super::ExtractionMode;

pub const DEFAULT_CLAIM_EXTRACTION_MODE: ExtractionMode = ExtractionMode::Strict;
pub const DEFAULT_MAX_CLAIMS: usize = 10;
pub const DEFAULT_MAX_EVIDENCE_PER_CLAIM: usize = 3;
pub const DEFAULT_MIN_SUPPORT_RATE: f64 = 0.6;
pub const DEFAULT_ON_INSUFFICIENT: Decision = Decision::Refuse;
pub const DEFAULT_CONTRADICTION_THRESHOLD: f64 = 0.0;
