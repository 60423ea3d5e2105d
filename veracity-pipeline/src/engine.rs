//! VerificationPipeline — the explicit context object for one deployment.
//!
//! Owns the extractor, retriever, classifier, policy store, and audit sink.
//! Constructed once at process start and passed by reference into every
//! invocation; no global state, no first-call initialization guard.

use tracing::{debug, info, warn};
use veracity_core::config::{Policy, PolicyStore};
use veracity_core::constants::CLUSTER_OVERLAP_THRESHOLD;
use veracity_core::errors::VeracityResult;
use veracity_core::models::{
    AuditInput, AuditRecord, ClaimResult, Decision, Metrics, TruthLabel, VerificationRequest,
    VerificationResponse, Verdict,
};
use veracity_core::traits::{IAuditSink, IClaimExtractor, IEvidenceRetriever};
use veracity_verify::{select_verdict, TruthClassifier};

use crate::cluster::cluster_claims;
use crate::decision::decide;
use crate::metrics::compute_metrics;

/// Outcome of the fallible inner run, before audit and response assembly.
struct Outcome {
    decision: Decision,
    claims: Vec<ClaimResult>,
    metrics: Metrics,
    note: Option<String>,
}

/// The verification pipeline for one deployment.
pub struct VerificationPipeline {
    extractor: Box<dyn IClaimExtractor>,
    retriever: Box<dyn IEvidenceRetriever>,
    classifier: TruthClassifier,
    policies: PolicyStore,
    audit: Box<dyn IAuditSink>,
}

impl VerificationPipeline {
    pub fn new(
        extractor: Box<dyn IClaimExtractor>,
        retriever: Box<dyn IEvidenceRetriever>,
        classifier: TruthClassifier,
        policies: PolicyStore,
        audit: Box<dyn IAuditSink>,
    ) -> Self {
        info!(
            extractor = extractor.name(),
            corpus = retriever.corpus_size(),
            profiles = policies.len(),
            "verification pipeline ready"
        );
        Self {
            extractor,
            retriever,
            classifier,
            policies,
            audit,
        }
    }

    /// Verify one request end to end.
    ///
    /// Always returns a well-formed response; internal faults collapse to
    /// `Decision::Error` with empty claims and metrics. Exactly one audit
    /// record is emitted on every path, including the error path.
    pub fn verify(&self, request: &VerificationRequest) -> VerificationResponse {
        let policy = self.policies.get(&request.policy_profile);

        let (decision, claims, metrics, error, note) = match self.run(request, &policy) {
            Ok(outcome) => (
                outcome.decision,
                outcome.claims,
                outcome.metrics,
                None,
                outcome.note,
            ),
            Err(e) => {
                warn!(request_id = %request.request_id, error = %e, "pipeline fault");
                (
                    Decision::Error,
                    Vec::new(),
                    Metrics::default(),
                    Some(e.to_string()),
                    None,
                )
            }
        };

        let mut record = AuditRecord::new(
            request.request_id.clone(),
            request.domain.clone(),
            AuditInput {
                generated_text: request.generated_text.clone(),
                policy_profile: request.policy_profile.clone(),
            },
            claims.clone(),
            metrics.clone(),
            decision,
        );
        if let Some(error) = error {
            record = record.with_error(error);
        }
        if let Some(note) = note {
            record = record.with_note(note);
        }
        self.audit.record(&record);

        info!(
            request_id = %request.request_id,
            decision = %decision,
            claims = claims.len(),
            "verification complete"
        );

        VerificationResponse {
            decision,
            claims,
            metrics,
            audit_id: request.request_id.clone(),
        }
    }

    /// The fallible core: extraction → per-claim retrieval/classification →
    /// clustering/metrics → decision.
    fn run(&self, request: &VerificationRequest, policy: &Policy) -> VeracityResult<Outcome> {
        let claims = self.extractor.extract(
            &request.generated_text,
            policy.claim_extraction_mode,
            policy.max_claims,
        );

        if claims.is_empty() {
            return Ok(Outcome {
                decision: policy.on_insufficient,
                claims: Vec::new(),
                metrics: Metrics::default(),
                note: Some("no claims extracted".to_string()),
            });
        }

        let mut results = Vec::with_capacity(claims.len());
        for claim in &claims {
            let evidence = self
                .retriever
                .retrieve(claim, policy.max_evidence_per_claim)?;

            let verdicts: Vec<Verdict> = evidence
                .iter()
                .map(|item| self.classifier.classify(claim, &item.text))
                .collect();
            let evidence_ids: Vec<String> =
                evidence.iter().map(|item| item.source_id.clone()).collect();

            let result = match select_verdict(&verdicts) {
                Some(selected) => ClaimResult {
                    claim: claim.clone(),
                    label: selected.label,
                    score: selected.semantic_score,
                    evidence_ids,
                },
                // No evidence retrieved at all: nothing supports the claim.
                None => ClaimResult {
                    claim: claim.clone(),
                    label: TruthLabel::Unsupported,
                    score: 0.0,
                    evidence_ids,
                },
            };
            debug!(claim = %result.claim, label = %result.label, "claim classified");
            results.push(result);
        }

        // Metrics come from the dominant cluster; the decision reads every
        // claim result.
        let clusters = cluster_claims(&results, CLUSTER_OVERLAP_THRESHOLD);
        let metrics = clusters
            .first()
            .map(|dominant| compute_metrics(dominant))
            .unwrap_or_default();

        let decision = decide(&results, policy);

        Ok(Outcome {
            decision,
            claims: results,
            metrics,
            note: None,
        })
    }
}
