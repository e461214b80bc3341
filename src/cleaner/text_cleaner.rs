//! Batch cleaning of raw documents.
//!
//! [`TextCleaner`] runs documents through a [`LanguagePipeline`] on a
//! dedicated thread pool, filters each document's tokens with a
//! [`TokenFilterPolicy`], and projects the survivors to their output form.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::analysis::pipeline::{EnglishPipeline, LanguagePipeline};
use crate::analysis::token::AnnotatedToken;
use crate::cleaner::config::FilterConfiguration;
use crate::cleaner::policy::{TokenFilterPolicy, UnwantedReason};
use crate::cleaner::word_lists::WordLists;
use crate::error::{LexsieveError, Result};

/// A document whose tokenization failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    /// Index of the document in the input.
    pub index: usize,

    /// Error reported by the pipeline.
    pub error: String,
}

/// Counters collected during a cleaning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanStats {
    pub documents: usize,
    pub failed_documents: usize,
    pub tokens_seen: usize,
    pub tokens_kept: usize,

    /// Dropped tokens per rule.
    pub dropped: BTreeMap<UnwantedReason, usize>,
}

impl CleanStats {
    /// Total number of dropped tokens.
    pub fn tokens_dropped(&self) -> usize {
        self.dropped.values().sum()
    }

    fn record(&mut self, decision: Option<UnwantedReason>) {
        self.tokens_seen += 1;
        match decision {
            Some(reason) => *self.dropped.entry(reason).or_insert(0) += 1,
            None => self.tokens_kept += 1,
        }
    }
}

/// Cleaned documents together with what went wrong and what was dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanReport {
    /// One entry per input document, in input order. Failed documents are
    /// empty.
    pub documents: Vec<Vec<String>>,

    pub failures: Vec<DocumentFailure>,

    pub stats: CleanStats,
}

/// The decision taken for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDecision {
    pub token: AnnotatedToken,

    /// Rule that dropped the token, or None if it was kept.
    pub reason: Option<UnwantedReason>,

    /// Output form of a kept token.
    pub output: Option<String>,
}

impl TokenDecision {
    pub fn is_kept(&self) -> bool {
        self.reason.is_none()
    }
}

/// Cleans raw documents into filtered, normalized token sequences.
///
/// # Examples
///
/// ```
/// use lexsieve::cleaner::{FilterConfiguration, TextCleaner};
///
/// let config = FilterConfiguration::all_disabled().with_lowercase(true);
/// let cleaner = TextCleaner::new(config).unwrap();
///
/// assert_eq!(cleaner.clean(&["Hello World!"]), vec![vec!["hello", "world", "!"]]);
/// ```
pub struct TextCleaner {
    policy: TokenFilterPolicy,
    pipeline: Arc<dyn LanguagePipeline>,
    thread_pool: Arc<ThreadPool>,
}

impl std::fmt::Debug for TextCleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextCleaner")
            .field("policy", &self.policy)
            .field("pipeline", &self.pipeline.name())
            .field("threads", &self.thread_pool.current_num_threads())
            .finish()
    }
}

impl TextCleaner {
    /// Create a cleaner with the bundled English pipeline, loading the word
    /// lists the configuration enables.
    pub fn new(config: FilterConfiguration) -> Result<Self> {
        Self::with_pipeline(config, Arc::new(EnglishPipeline::new()))
    }

    /// Create a cleaner with a custom pipeline, loading word lists.
    pub fn with_pipeline(
        config: FilterConfiguration,
        pipeline: Arc<dyn LanguagePipeline>,
    ) -> Result<Self> {
        info!(pipeline = pipeline.name(), "Initializing text cleaner");
        let word_lists = WordLists::load(&config);
        Self::with_parts(config, word_lists, pipeline)
    }

    /// Create a cleaner from already-loaded word lists and a pipeline.
    pub fn with_parts(
        config: FilterConfiguration,
        word_lists: WordLists,
        pipeline: Arc<dyn LanguagePipeline>,
    ) -> Result<Self> {
        config.batch.validate()?;

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(config.batch.threads())
            .thread_name(|i| format!("lexsieve-tokenize-{i}"))
            .build()
            .map_err(|e| LexsieveError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(TextCleaner {
            policy: TokenFilterPolicy::new(config, word_lists),
            pipeline,
            thread_pool: Arc::new(thread_pool),
        })
    }

    pub fn policy(&self) -> &TokenFilterPolicy {
        &self.policy
    }

    pub fn config(&self) -> &FilterConfiguration {
        self.policy.config()
    }

    pub fn pipeline(&self) -> &dyn LanguagePipeline {
        self.pipeline.as_ref()
    }

    /// Clean a batch of documents.
    ///
    /// The output has one inner vector per input document, in input order.
    /// Documents that fail to tokenize are logged and yield an empty vector.
    pub fn clean<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Vec<String>> {
        self.clean_with_report(texts).documents
    }

    /// Clean a batch of documents and report failures and drop counts.
    pub fn clean_with_report<S: AsRef<str> + Sync>(&self, texts: &[S]) -> CleanReport {
        let mut report = CleanReport {
            documents: Vec::with_capacity(texts.len()),
            ..Default::default()
        };
        if texts.is_empty() {
            return report;
        }

        let start = Instant::now();
        let batch_size = self.config().batch.batch_size;
        info!(documents = texts.len(), batch_size, "Cleaning text");

        for (batch_index, batch) in texts.chunks(batch_size).enumerate() {
            let refs: Vec<&str> = batch.iter().map(|text| text.as_ref()).collect();
            let results = self
                .thread_pool
                .install(|| self.pipeline.tokenize_all(&refs));
            debug!(batch = batch_index, size = refs.len(), "Tokenized batch");

            for (offset, result) in results.into_iter().enumerate() {
                let index = batch_index * batch_size + offset;
                report.stats.documents += 1;

                match result {
                    Ok(tokens) => {
                        let cleaned = self.filter_document(&tokens, &mut report.stats);
                        report.documents.push(cleaned);
                    }
                    Err(e) => {
                        warn!(document = index, error = %e, "Skipping document that failed to tokenize");
                        report.stats.failed_documents += 1;
                        report.failures.push(DocumentFailure {
                            index,
                            error: e.to_string(),
                        });
                        report.documents.push(Vec::new());
                    }
                }
            }
        }

        info!(
            documents = report.stats.documents,
            failed = report.stats.failed_documents,
            tokens_kept = report.stats.tokens_kept,
            tokens_dropped = report.stats.tokens_dropped(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Finished cleaning text"
        );

        report
    }

    /// Clean a single document, propagating a tokenization error.
    pub fn clean_one(&self, text: &str) -> Result<Vec<String>> {
        let tokens = self.pipeline.tokenize(text)?;
        Ok(self.policy.apply(&tokens))
    }

    /// Tokenize one document and report the decision for every token.
    pub fn explain(&self, text: &str) -> Result<Vec<TokenDecision>> {
        let tokens = self.pipeline.tokenize(text)?;

        Ok(tokens
            .into_iter()
            .map(|token| {
                let reason = self.policy.check(&token);
                let output = reason.is_none().then(|| self.policy.project(&token));
                TokenDecision {
                    token,
                    reason,
                    output,
                }
            })
            .collect())
    }

    fn filter_document(&self, tokens: &[AnnotatedToken], stats: &mut CleanStats) -> Vec<String> {
        let mut cleaned = Vec::with_capacity(tokens.len());
        for token in tokens {
            let decision = self.policy.check(token);
            stats.record(decision);
            if decision.is_none() {
                cleaned.push(self.policy.project(token));
            }
        }
        cleaned
    }
}
