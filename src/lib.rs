use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentStatus {
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedSource {
    pub source: String,
    pub similarity: f64,
    pub matched_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub similarity_score: f64,
    pub matched_sources: Vec<MatchedSource>,
    pub status: AssessmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SimilarityReport {
    fn failed(message: String) -> Self {
        Self {
            similarity_score: 0.0,
            matched_sources: Vec::new(),
            status: AssessmentStatus::Failed,
            error_message: Some(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Moderate,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub category: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub overall_score: i32,
    pub structure_score: i32,
    pub formatting_score: i32,
    pub readability_score: i32,
    pub completeness_score: i32,
    pub word_count: usize,
    pub abstract_length: usize,
    pub reference_count: usize,
    pub figure_count: usize,
    pub table_count: usize,
    pub issues: Vec<Issue>,
    pub recommendations: Vec<Recommendation>,
}

/// Faults that the plagiarism pipeline converts into a FAILED report at its
/// boundary. Collaborators that extract manuscript text report failures as
/// `Extraction`; nothing in this crate propagates these to the caller.
#[derive(Debug, Clone, Error)]
pub enum AssessmentError {
    #[error("Insufficient text content for plagiarism check")]
    InsufficientText,
    #[error("Failed to extract text: {0}")]
    Extraction(String),
    #[error("Similarity computation failed: {0}")]
    Computation(String),
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    min_text_chars: usize,
    token_min_chars: usize,
    similarity_max: f64,
    phrase_ratio_threshold: f64,
    phrase_similarity_scale: f64,
    phrase_similarity_cap: f64,
    self_sim_min_sentences: usize,
    self_sim_window: usize,
    self_sim_scale: f64,
    self_sim_cap: f64,
    missing_section_penalty: i32,
    section_order_penalty: i32,
    short_paper_words: usize,
    short_paper_penalty: i32,
    thin_paper_words: usize,
    thin_paper_penalty: i32,
    long_paper_words: usize,
    long_paper_penalty: i32,
    paragraph_avg_words: f64,
    long_paragraph_penalty: i32,
    long_sentence_words: f64,
    long_sentence_penalty: i32,
    wordy_sentence_words: f64,
    wordy_sentence_penalty: i32,
    passive_ratio_threshold: f64,
    passive_penalty: i32,
    jargon_word_chars: usize,
    jargon_ratio_threshold: f64,
    jargon_penalty: i32,
    short_abstract_words: usize,
    short_abstract_penalty: i32,
    long_abstract_words: usize,
    long_abstract_penalty: i32,
    sparse_reference_count: usize,
    sparse_reference_penalty: i32,
    modest_reference_count: usize,
    modest_reference_penalty: i32,
    missing_ack_penalty: i32,
    reference_count_cap: usize,
    structure_weight: f64,
    formatting_weight: f64,
    readability_weight: f64,
    completeness_weight: f64,
    score_start: i32,
    score_floor: i32,
}

static HP: Hyperparameters = Hyperparameters {
    min_text_chars: 100,
    token_min_chars: 2,
    similarity_max: 100.0,
    phrase_ratio_threshold: 5.0,
    phrase_similarity_scale: 2.0,
    phrase_similarity_cap: 30.0,
    self_sim_min_sentences: 5,
    self_sim_window: 20,
    self_sim_scale: 0.3,
    self_sim_cap: 15.0,
    missing_section_penalty: 15,
    section_order_penalty: 10,
    short_paper_words: 2000,
    short_paper_penalty: 30,
    thin_paper_words: 3000,
    thin_paper_penalty: 15,
    long_paper_words: 10000,
    long_paper_penalty: 10,
    paragraph_avg_words: 200.0,
    long_paragraph_penalty: 10,
    long_sentence_words: 30.0,
    long_sentence_penalty: 20,
    wordy_sentence_words: 25.0,
    wordy_sentence_penalty: 10,
    passive_ratio_threshold: 30.0,
    passive_penalty: 15,
    jargon_word_chars: 12,
    jargon_ratio_threshold: 15.0,
    jargon_penalty: 10,
    short_abstract_words: 100,
    short_abstract_penalty: 25,
    long_abstract_words: 300,
    long_abstract_penalty: 10,
    sparse_reference_count: 10,
    sparse_reference_penalty: 20,
    modest_reference_count: 15,
    modest_reference_penalty: 10,
    missing_ack_penalty: 5,
    reference_count_cap: 100,
    structure_weight: 0.25,
    formatting_weight: 0.20,
    readability_weight: 0.30,
    completeness_weight: 0.25,
    score_start: 100,
    score_floor: 0,
};

// Academic boilerplate that shows up in almost every paper. Heavy use is a
// weak plagiarism signal, not proof; the flagger caps its contribution.
static COMMON_PHRASES: &[&str] = &[
    "in this paper",
    "this study",
    "our results",
    "we found that",
    "it was observed",
    "the results show",
    "in conclusion",
];

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static COMMON_PHRASE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    COMMON_PHRASES
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", regex::escape(p))).unwrap())
        .collect()
});

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n+").unwrap());

static SECTION_MARKERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("introduction", Regex::new(r"(?i)introduction|background").unwrap()),
        (
            "methodology",
            Regex::new(r"(?i)method|methodology|materials and methods").unwrap(),
        ),
        ("results", Regex::new(r"(?i)results|findings").unwrap()),
        ("discussion", Regex::new(r"(?i)discussion").unwrap()),
        ("conclusion", Regex::new(r"(?i)conclusion").unwrap()),
    ]
});

static PASSIVE_VOICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(was|were|been|being)\s+\w+ed\b").unwrap());

static BRACKET_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]").unwrap());

static YEAR_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\d{4}\)").unwrap());

static ET_AL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)et al\.").unwrap());

static REF_SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)references|bibliography").unwrap());

static FIGURE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)figure\s+\d+|fig\.\s+\d+").unwrap());

static TABLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)table\s+\d+").unwrap());

static ACKNOWLEDGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)acknowledgment|acknowledgement").unwrap());

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .filter(|t| t.chars().count() > HP.token_min_chars)
        .map(str::to_string)
        .collect()
}

fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Term-frequency cosine similarity
// ---------------------------------------------------------------------------

/// Build index-aligned term-frequency vectors for two token sequences.
/// The vocabulary is an ordered, deduplicated list (first-seen order across
/// both sequences) so that both vectors share one enumeration; building them
/// against different orders would silently break the comparison.
fn build_aligned_vectors(tokens_a: &[String], tokens_b: &[String]) -> (Vec<f64>, Vec<f64>) {
    let mut vocabulary: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for token in tokens_a.iter().chain(tokens_b.iter()) {
        if seen.insert(token.as_str()) {
            vocabulary.push(token.as_str());
        }
    }

    let mut counts_a: HashMap<&str, usize> = HashMap::new();
    for token in tokens_a {
        *counts_a.entry(token.as_str()).or_insert(0) += 1;
    }
    let mut counts_b: HashMap<&str, usize> = HashMap::new();
    for token in tokens_b {
        *counts_b.entry(token.as_str()).or_insert(0) += 1;
    }

    let vector_a = vocabulary
        .iter()
        .map(|w| counts_a.get(w).copied().unwrap_or(0) as f64)
        .collect();
    let vector_b = vocabulary
        .iter()
        .map(|w| counts_b.get(w).copied().unwrap_or(0) as f64)
        .collect();
    (vector_a, vector_b)
}

fn cosine_score(v1: &[f64], v2: &[f64]) -> Result<f64, AssessmentError> {
    if v1.len() != v2.len() {
        return Err(AssessmentError::Computation(format!(
            "vector length mismatch: {} vs {}",
            v1.len(),
            v2.len()
        )));
    }

    let mut dot = 0.0f64;
    let mut norm1 = 0.0f64;
    let mut norm2 = 0.0f64;
    for (a, b) in v1.iter().zip(v2) {
        dot += a * b;
        norm1 += a * a;
        norm2 += b * b;
    }
    let norm1 = norm1.sqrt();
    let norm2 = norm2.sqrt();

    if norm1 == 0.0 || norm2 == 0.0 {
        return Ok(0.0);
    }
    Ok(((dot / (norm1 * norm2)) * 100.0).clamp(0.0, HP.similarity_max))
}

fn tf_cosine(text_a: &str, text_b: &str) -> Result<f64, AssessmentError> {
    let tokens_a = tokenize(text_a);
    let tokens_b = tokenize(text_b);
    let (vector_a, vector_b) = build_aligned_vectors(&tokens_a, &tokens_b);
    cosine_score(&vector_a, &vector_b)
}

/// Term-frequency cosine similarity between two texts, in [0, 100].
///
/// This is raw term frequency only. No inverse-document-frequency weighting
/// is applied, deliberately: every downstream threshold is tuned against the
/// unweighted score, and adding IDF would change the scoring contract.
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    tf_cosine(text_a, text_b).unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Plagiarism pipeline
// ---------------------------------------------------------------------------

fn flag_common_phrases(text: &str) -> Vec<MatchedSource> {
    let mut matches = Vec::new();

    let wc = word_count(text);
    if wc == 0 {
        return matches;
    }

    let phrase_count: usize = COMMON_PHRASE_RES
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();

    let phrase_ratio = (phrase_count as f64 / wc as f64) * 100.0;
    if phrase_ratio > HP.phrase_ratio_threshold {
        matches.push(MatchedSource {
            source: "Common Academic Phrases".to_string(),
            similarity: (phrase_ratio * HP.phrase_similarity_scale).min(HP.phrase_similarity_cap),
            matched_text: format!("Detected {phrase_count} instances of common phrases"),
        });
    }
    matches
}

/// Originality estimate from internal sentence redundancy, in [0, 15].
/// With no external corpus to compare against, extreme repetition inside the
/// document is the only available signal; the 0.3 scale and the cap keep
/// false positives low.
fn self_similarity(text: &str) -> Result<f64, AssessmentError> {
    let sentences = split_sentences(text);
    if sentences.len() < HP.self_sim_min_sentences {
        return Ok(0.0);
    }

    let window = &sentences[..sentences.len().min(HP.self_sim_window)];
    let mut max_similarity = 0.0f64;
    for i in 0..window.len() {
        for j in i + 1..window.len() {
            let score = tf_cosine(window[i], window[j])?;
            max_similarity = max_similarity.max(score);
        }
    }
    Ok((max_similarity * HP.self_sim_scale).min(HP.self_sim_cap))
}

fn run_plagiarism(text: &str) -> Result<SimilarityReport, AssessmentError> {
    if text.trim().chars().count() < HP.min_text_chars {
        return Err(AssessmentError::InsufficientText);
    }

    let matched_sources = flag_common_phrases(text);
    let score = if matched_sources.is_empty() {
        self_similarity(text)?
    } else {
        matched_sources
            .iter()
            .map(|m| m.similarity)
            .fold(0.0f64, f64::max)
    };

    Ok(SimilarityReport {
        similarity_score: score.min(HP.similarity_max),
        matched_sources,
        status: AssessmentStatus::Completed,
        error_message: None,
    })
}

/// Run the plagiarism pipeline over manuscript text.
///
/// Never panics and never returns an error: every fault, including the
/// minimum-length precondition, comes back as a report with
/// `status == FAILED` and a human-readable `error_message`.
pub fn check_plagiarism(text: &str) -> SimilarityReport {
    run_plagiarism(text).unwrap_or_else(|e| SimilarityReport::failed(e.to_string()))
}

/// Variant of [`check_plagiarism`] for callers that obtain the text from an
/// extraction collaborator. An extraction failure becomes a FAILED report
/// carrying the collaborator's message.
pub fn check_plagiarism_extracted(extracted: Result<String, AssessmentError>) -> SimilarityReport {
    match extracted {
        Ok(text) => check_plagiarism(&text),
        Err(e) => SimilarityReport::failed(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Quality metrics
// ---------------------------------------------------------------------------

fn count_references(text: &str) -> usize {
    let mut count = BRACKET_REF_RE.find_iter(text).count();
    count += YEAR_REF_RE.find_iter(text).count();
    count += ET_AL_RE.find_iter(text).count();
    // A References/Bibliography heading contributes one count, not one per
    // occurrence.
    if REF_SECTION_RE.is_match(text) {
        count += 1;
    }
    // Each reference typically produces about two pattern hits.
    (count / 2).min(HP.reference_count_cap)
}

fn count_figures(text: &str) -> usize {
    FIGURE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

fn count_tables(text: &str) -> usize {
    TABLE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

// ---------------------------------------------------------------------------
// Quality sub-scorers
// ---------------------------------------------------------------------------

fn score_structure(
    text: &str,
    issues: &mut Vec<Issue>,
    recommendations: &mut Vec<Recommendation>,
) -> i32 {
    let mut score = HP.score_start;

    let missing: Vec<&str> = SECTION_MARKERS
        .iter()
        .filter(|(_, re)| !re.is_match(text))
        .map(|(name, _)| *name)
        .collect();
    score -= HP.missing_section_penalty * missing.len() as i32;

    if !missing.is_empty() {
        let joined = missing.join(", ");
        issues.push(Issue {
            severity: Severity::Critical,
            category: "Structure".to_string(),
            message: format!("Missing essential sections: {joined}"),
        });
        recommendations.push(Recommendation {
            priority: Priority::High,
            category: "Structure".to_string(),
            suggestion: format!("Add the following sections: {joined}"),
        });
    }

    // The ordering check only means anything when all three markers exist;
    // a missing marker is already penalized above.
    let lower = text.to_lowercase();
    if let (Some(intro), Some(method), Some(results)) = (
        lower.find("introduction"),
        lower.find("method"),
        lower.find("results"),
    ) {
        if intro >= method || method >= results {
            score -= HP.section_order_penalty;
            issues.push(Issue {
                severity: Severity::Moderate,
                category: "Structure".to_string(),
                message: "Sections may not be in logical order".to_string(),
            });
        }
    }

    score.max(HP.score_floor)
}

fn score_formatting(
    text: &str,
    wc: usize,
    issues: &mut Vec<Issue>,
    recommendations: &mut Vec<Recommendation>,
) -> i32 {
    let mut score = HP.score_start;

    if wc < HP.short_paper_words {
        score -= HP.short_paper_penalty;
        issues.push(Issue {
            severity: Severity::Critical,
            category: "Formatting".to_string(),
            message: format!("Word count ({wc}) is below minimum recommended length"),
        });
        recommendations.push(Recommendation {
            priority: Priority::High,
            category: "Content".to_string(),
            suggestion: "Expand the manuscript to at least 3000 words".to_string(),
        });
    } else if wc < HP.thin_paper_words {
        score -= HP.thin_paper_penalty;
        issues.push(Issue {
            severity: Severity::Moderate,
            category: "Formatting".to_string(),
            message: format!("Word count ({wc}) is below typical length for research papers"),
        });
    } else if wc > HP.long_paper_words {
        score -= HP.long_paper_penalty;
        issues.push(Issue {
            severity: Severity::Minor,
            category: "Formatting".to_string(),
            message: format!("Word count ({wc}) is quite long; consider condensing"),
        });
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            category: "Content".to_string(),
            suggestion: "Consider reducing length to improve readability".to_string(),
        });
    }

    let paragraph_count = PARAGRAPH_SPLIT_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();
    if paragraph_count > 0 {
        let avg_paragraph_words = wc as f64 / paragraph_count as f64;
        if avg_paragraph_words > HP.paragraph_avg_words {
            score -= HP.long_paragraph_penalty;
            issues.push(Issue {
                severity: Severity::Minor,
                category: "Formatting".to_string(),
                message: "Paragraphs are too long on average".to_string(),
            });
            recommendations.push(Recommendation {
                priority: Priority::Low,
                category: "Formatting".to_string(),
                suggestion: "Break long paragraphs into smaller, more digestible sections"
                    .to_string(),
            });
        }
    }

    score.max(HP.score_floor)
}

fn score_readability(
    text: &str,
    issues: &mut Vec<Issue>,
    recommendations: &mut Vec<Recommendation>,
) -> i32 {
    let mut score = HP.score_start;

    let sentence_count = split_sentences(text).len();
    let total_words = word_count(text);

    if sentence_count > 0 {
        let avg_sentence_length = total_words as f64 / sentence_count as f64;
        if avg_sentence_length > HP.long_sentence_words {
            score -= HP.long_sentence_penalty;
            issues.push(Issue {
                severity: Severity::Moderate,
                category: "Readability".to_string(),
                message: "Average sentence length is too long, affecting readability".to_string(),
            });
            recommendations.push(Recommendation {
                priority: Priority::Medium,
                category: "Writing".to_string(),
                suggestion: "Reduce average sentence length to improve clarity".to_string(),
            });
        } else if avg_sentence_length > HP.wordy_sentence_words {
            score -= HP.wordy_sentence_penalty;
            recommendations.push(Recommendation {
                priority: Priority::Low,
                category: "Writing".to_string(),
                suggestion: "Consider shortening some longer sentences".to_string(),
            });
        }

        let passive_count = PASSIVE_VOICE_RE.find_iter(text).count();
        let passive_ratio = (passive_count as f64 / sentence_count as f64) * 100.0;
        if passive_ratio > HP.passive_ratio_threshold {
            score -= HP.passive_penalty;
            issues.push(Issue {
                severity: Severity::Moderate,
                category: "Readability".to_string(),
                message: "Excessive use of passive voice detected".to_string(),
            });
            recommendations.push(Recommendation {
                priority: Priority::Medium,
                category: "Writing".to_string(),
                suggestion: "Use more active voice to improve clarity and engagement".to_string(),
            });
        }
    }

    if total_words > 0 {
        let long_words = text
            .split_whitespace()
            .filter(|w| w.chars().count() > HP.jargon_word_chars)
            .count();
        let jargon_ratio = (long_words as f64 / total_words as f64) * 100.0;
        if jargon_ratio > HP.jargon_ratio_threshold {
            score -= HP.jargon_penalty;
            recommendations.push(Recommendation {
                priority: Priority::Low,
                category: "Writing".to_string(),
                suggestion: "Consider simplifying technical terminology where possible".to_string(),
            });
        }
    }

    score.max(HP.score_floor)
}

fn score_completeness(
    text: &str,
    abstract_length: usize,
    reference_count: usize,
    issues: &mut Vec<Issue>,
    recommendations: &mut Vec<Recommendation>,
) -> i32 {
    let mut score = HP.score_start;

    if abstract_length < HP.short_abstract_words {
        score -= HP.short_abstract_penalty;
        issues.push(Issue {
            severity: Severity::Critical,
            category: "Completeness".to_string(),
            message: format!("Abstract is too short ({abstract_length} words)"),
        });
        recommendations.push(Recommendation {
            priority: Priority::High,
            category: "Abstract".to_string(),
            suggestion: "Expand abstract to 150-250 words".to_string(),
        });
    } else if abstract_length > HP.long_abstract_words {
        score -= HP.long_abstract_penalty;
        issues.push(Issue {
            severity: Severity::Minor,
            category: "Completeness".to_string(),
            message: format!("Abstract is too long ({abstract_length} words)"),
        });
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            category: "Abstract".to_string(),
            suggestion: "Condense abstract to 150-250 words".to_string(),
        });
    }

    if reference_count < HP.sparse_reference_count {
        score -= HP.sparse_reference_penalty;
        issues.push(Issue {
            severity: Severity::Moderate,
            category: "Completeness".to_string(),
            message: format!("Insufficient references ({reference_count} detected)"),
        });
        recommendations.push(Recommendation {
            priority: Priority::High,
            category: "References".to_string(),
            suggestion: "Add more references to support your claims (aim for 20-40)".to_string(),
        });
    } else if reference_count < HP.modest_reference_count {
        score -= HP.modest_reference_penalty;
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            category: "References".to_string(),
            suggestion: "Consider adding more references to strengthen your literature review"
                .to_string(),
        });
    }

    if !ACKNOWLEDGMENT_RE.is_match(text) {
        score -= HP.missing_ack_penalty;
        recommendations.push(Recommendation {
            priority: Priority::Low,
            category: "Completeness".to_string(),
            suggestion: "Consider adding an acknowledgments section".to_string(),
        });
    }

    score.max(HP.score_floor)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the quality pipeline over manuscript text and its abstract.
///
/// Quality assessment has no failure path: it degrades scores instead of
/// refusing to score, and always returns a report. The overall score is the
/// weighted combination of the four sub-scores.
pub fn assess_quality(text: &str, abstract_text: &str) -> QualityReport {
    let mut issues: Vec<Issue> = Vec::new();
    let mut recommendations: Vec<Recommendation> = Vec::new();

    let wc = word_count(text);
    let abstract_length = word_count(abstract_text);
    let reference_count = count_references(text);
    let figure_count = count_figures(text);
    let table_count = count_tables(text);

    let structure_score = score_structure(text, &mut issues, &mut recommendations);
    let formatting_score = score_formatting(text, wc, &mut issues, &mut recommendations);
    let readability_score = score_readability(text, &mut issues, &mut recommendations);
    let completeness_score = score_completeness(
        text,
        abstract_length,
        reference_count,
        &mut issues,
        &mut recommendations,
    );

    let overall_score = (structure_score as f64 * HP.structure_weight
        + formatting_score as f64 * HP.formatting_weight
        + readability_score as f64 * HP.readability_weight
        + completeness_score as f64 * HP.completeness_weight)
        .round() as i32;

    QualityReport {
        overall_score,
        structure_score,
        formatting_score,
        readability_score,
        completeness_score,
        word_count: wc,
        abstract_length,
        reference_count,
        figure_count,
        table_count,
        issues,
        recommendations,
    }
}
