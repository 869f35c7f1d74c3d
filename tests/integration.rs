use scholarlint::{
    assess_quality, check_plagiarism, check_plagiarism_extracted, similarity, AssessmentError,
    AssessmentStatus, Priority, Severity,
};

fn sample_manuscript() -> String {
    let sentence =
        "The committee examined the second proposal during the spring planning session.";
    let paragraph = format!("{sentence} {sentence} {sentence}");
    let block = |heading: &str| {
        let mut s = String::new();
        s.push_str(heading);
        s.push_str("\n\n");
        for _ in 0..20 {
            s.push_str(&paragraph);
            s.push_str("\n\n");
        }
        s
    };

    let mut text = String::new();
    text.push_str(&block("Introduction"));
    text.push_str(&block("Methodology"));
    text.push_str(&block("Results"));
    text.push_str("Figure 1 and Fig. 2 summarize the counts shown in Table 1.\n\n");
    text.push_str(&block("Discussion"));
    text.push_str(&block("Conclusion"));
    text.push_str("Acknowledgments\n\nThe committee thanks the review panel for careful reading.\n\n");
    text.push_str("References\n\n");
    for i in 1..=25u32 {
        text.push_str(&format!(
            "[{i}] Author Name and Collaborator Name ({}).\n",
            1990 + i
        ));
    }
    text
}

fn sample_abstract(words: usize) -> String {
    vec!["assessment"; words].join(" ")
}

#[test]
fn identical_texts_score_one_hundred() {
    let text = "the quick brown fox jumps over the lazy dog near the river bank";
    let score = similarity(text, text);
    assert!(
        (score - 100.0).abs() < 1e-6,
        "Identical texts should score 100, got {score}"
    );
}

#[test]
fn similarity_is_symmetric() {
    let a = "the committee reviewed the proposal before the spring deadline";
    let b = "the committee rejected the annual budget after some debate";
    let ab = similarity(a, b);
    let ba = similarity(b, a);
    assert!(
        (ab - ba).abs() < 1e-9,
        "Similarity should be symmetric: {ab} vs {ba}"
    );
}

#[test]
fn disjoint_vocabularies_score_zero() {
    let score = similarity("apple banana cherry orange", "piano violin trumpet drums");
    assert_eq!(score, 0.0);
}

#[test]
fn similarity_stays_in_range() {
    let pairs = [
        ("", ""),
        ("one two three", ""),
        ("shared words here", "shared words there"),
        ("entirely different tokens", "nothing matching whatsoever"),
    ];
    for (a, b) in pairs {
        let score = similarity(a, b);
        assert!(
            (0.0..=100.0).contains(&score),
            "similarity({a:?}, {b:?}) out of range: {score}"
        );
    }
}

#[test]
fn empty_text_fails_plagiarism_check() {
    let report = check_plagiarism("");
    assert_eq!(report.status, AssessmentStatus::Failed);
    assert_eq!(report.similarity_score, 0.0);
    assert!(report.matched_sources.is_empty());
    assert_eq!(
        report.error_message.as_deref(),
        Some("Insufficient text content for plagiarism check")
    );
}

#[test]
fn short_text_fails_plagiarism_check() {
    let report = check_plagiarism(&"a".repeat(99));
    assert_eq!(report.status, AssessmentStatus::Failed);
    assert_eq!(report.similarity_score, 0.0);
}

#[test]
fn exact_minimum_length_completes() {
    // Five distinct sentences sharing no tokens, exactly at the length floor.
    let text =
        "Alpha proteins fold. Beta enzymes react. Gamma cells divide. Delta genes mutate. \
         Epsilon webs bloom.";
    assert_eq!(text.trim().chars().count(), 100);
    let report = check_plagiarism(text);
    assert_eq!(report.status, AssessmentStatus::Completed);
    assert!(report.matched_sources.is_empty());
    assert_eq!(report.similarity_score, 0.0);
}

#[test]
fn repetitive_text_hits_self_similarity_cap() {
    let sentence = "The committee reviewed the full proposal during the spring session.";
    let text = format!("{0} {0} {0} {0} {0} {0}", sentence);
    let report = check_plagiarism(&text);
    assert_eq!(report.status, AssessmentStatus::Completed);
    assert!(report.matched_sources.is_empty());
    assert!(
        (report.similarity_score - 15.0).abs() < 1e-9,
        "Identical sentences should hit the self-similarity cap, got {}",
        report.similarity_score
    );
}

#[test]
fn distinct_sentences_score_zero_self_similarity() {
    let text = "Alpha proteins fold quickly. Beta enzymes react slowly. \
                Gamma cells divide often. Delta genes mutate rarely. \
                Epsilon tissues grow steadily. Zeta organs function normally.";
    let report = check_plagiarism(text);
    assert_eq!(report.status, AssessmentStatus::Completed);
    assert_eq!(report.similarity_score, 0.0);
}

#[test]
fn few_sentences_yield_zero_estimate() {
    let text = "This manuscript describes a measurement campaign spanning two decades of \
                continuous atmospheric observation across four stations.";
    assert!(text.trim().chars().count() >= 100);
    let report = check_plagiarism(text);
    assert_eq!(report.status, AssessmentStatus::Completed);
    assert_eq!(report.similarity_score, 0.0);
}

#[test]
fn boilerplate_heavy_text_is_flagged() {
    let unit = "In this paper we found that the committee approach works. ";
    let text = unit.repeat(10);
    let report = check_plagiarism(&text);
    assert_eq!(report.status, AssessmentStatus::Completed);
    assert_eq!(report.matched_sources.len(), 1);
    let matched = &report.matched_sources[0];
    assert_eq!(matched.source, "Common Academic Phrases");
    assert!(matched.matched_text.contains("20 instances"));
    // 20 phrases in 100 words: ratio 20%, doubled and capped at 30.
    assert_eq!(report.similarity_score, 30.0);
}

#[test]
fn extraction_error_becomes_failed_report() {
    let report = check_plagiarism_extracted(Err(AssessmentError::Extraction(
        "malformed source document".to_string(),
    )));
    assert_eq!(report.status, AssessmentStatus::Failed);
    assert_eq!(report.similarity_score, 0.0);
    let message = report.error_message.expect("failed report carries a message");
    assert!(message.contains("malformed source document"));
}

#[test]
fn extracted_text_flows_through() {
    let sentence = "The committee reviewed the full proposal during the spring session.";
    let text = format!("{0} {0} {0} {0} {0} {0}", sentence);
    let report = check_plagiarism_extracted(Ok(text));
    assert_eq!(report.status, AssessmentStatus::Completed);
}

#[test]
fn well_formed_manuscript_scores_high() {
    let report = assess_quality(&sample_manuscript(), &sample_abstract(200));
    assert_eq!(report.structure_score, 100);
    assert_eq!(report.formatting_score, 100);
    assert_eq!(report.readability_score, 100);
    assert_eq!(report.completeness_score, 100);
    assert_eq!(report.overall_score, 100);
    assert_eq!(report.reference_count, 25);
    assert_eq!(report.figure_count, 2);
    assert_eq!(report.table_count, 1);
    assert_eq!(report.abstract_length, 200);
    assert!(report.issues.is_empty(), "issues: {:?}", report.issues);
    assert!(
        report.recommendations.is_empty(),
        "recommendations: {:?}",
        report.recommendations
    );
}

#[test]
fn missing_sections_floor_structure_score() {
    let text = "The committee reviewed the annual proposal. ".repeat(30);
    let report = assess_quality(&text, &sample_abstract(200));
    // Five absent sections at 15 points each; the ordering check is skipped
    // when its markers are missing.
    assert_eq!(report.structure_score, 25);
    let structure_issue = report
        .issues
        .iter()
        .find(|i| i.category == "Structure")
        .expect("missing sections should raise an issue");
    assert_eq!(structure_issue.severity, Severity::Critical);
    assert!(structure_issue.message.contains("introduction"));
    assert!(structure_issue.message.contains("conclusion"));
}

#[test]
fn out_of_order_sections_are_penalized() {
    let mut text = sample_manuscript();
    // Mention results before anything else so the ordering check trips.
    text.insert_str(0, "Early results summary. ");
    let report = assess_quality(&text, &sample_abstract(200));
    assert_eq!(report.structure_score, 90);
    assert!(report
        .issues
        .iter()
        .any(|i| i.message == "Sections may not be in logical order"));
}

#[test]
fn section_markers_match_any_case() {
    let text = "INTRODUCTION opens the paper. METHODOLOGY details the protocol. \
                RESULTS summarize the data. DISCUSSION interprets them. \
                CONCLUSION closes the argument.";
    let report = assess_quality(text, &sample_abstract(200));
    assert_eq!(report.structure_score, 100);
    assert!(!report.issues.iter().any(|i| i.category == "Structure"));
}

#[test]
fn short_abstract_raises_critical_issue() {
    let report = assess_quality(&sample_manuscript(), &sample_abstract(50));
    assert_eq!(report.abstract_length, 50);
    assert_eq!(report.completeness_score, 75);
    assert!(report.issues.iter().any(|i| {
        i.severity == Severity::Critical
            && i.category == "Completeness"
            && i.message.contains("Abstract is too short")
    }));
    assert!(report.recommendations.iter().any(|r| {
        r.priority == Priority::High && r.suggestion == "Expand abstract to 150-250 words"
    }));
}

#[test]
fn short_manuscript_is_penalized_for_formatting() {
    let text = "Introduction. Methods follow. Results appear. Discussion continues. \
                Conclusion ends the paper here with several more filler words attached.";
    let report = assess_quality(text, &sample_abstract(200));
    assert_eq!(report.formatting_score, 70);
    assert!(report.issues.iter().any(|i| {
        i.severity == Severity::Critical
            && i.category == "Formatting"
            && i.message.contains("below minimum recommended length")
    }));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.suggestion == "Expand the manuscript to at least 3000 words"));
}

#[test]
fn empty_input_still_produces_quality_report() {
    let report = assess_quality("", "");
    assert_eq!(report.word_count, 0);
    assert_eq!(report.structure_score, 25);
    assert_eq!(report.formatting_score, 70);
    assert_eq!(report.readability_score, 100);
    assert_eq!(report.completeness_score, 50);
}

#[test]
fn overall_score_is_weighted_combination() {
    let report = assess_quality(
        &"The committee reviewed the annual proposal. ".repeat(30),
        &sample_abstract(50),
    );
    let expected = (report.structure_score as f64 * 0.25
        + report.formatting_score as f64 * 0.20
        + report.readability_score as f64 * 0.30
        + report.completeness_score as f64 * 0.25)
        .round() as i32;
    assert_eq!(report.overall_score, expected);
    assert!((0..=100).contains(&report.overall_score));
}

#[test]
fn reports_are_idempotent() {
    let text = sample_manuscript();
    let abstract_text = sample_abstract(200);
    assert_eq!(check_plagiarism(&text), check_plagiarism(&text));
    assert_eq!(
        assess_quality(&text, &abstract_text),
        assess_quality(&text, &abstract_text)
    );
}

#[test]
fn json_output_is_valid() {
    let plagiarism = check_plagiarism(&sample_manuscript());
    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string_pretty(&plagiarism).unwrap()).unwrap();
    assert!(value.get("similarity_score").is_some());
    assert!(value.get("matched_sources").is_some());
    assert_eq!(value["status"], "COMPLETED");
    // A completed report carries no error message field at all.
    assert!(value.get("error_message").is_none());

    let failed: serde_json::Value =
        serde_json::to_value(check_plagiarism("")).unwrap();
    assert_eq!(failed["status"], "FAILED");
    assert!(failed.get("error_message").is_some());

    let quality: serde_json::Value =
        serde_json::to_value(assess_quality("", &sample_abstract(50))).unwrap();
    for key in [
        "overall_score",
        "structure_score",
        "formatting_score",
        "readability_score",
        "completeness_score",
        "word_count",
        "abstract_length",
        "reference_count",
        "figure_count",
        "table_count",
        "issues",
        "recommendations",
    ] {
        assert!(quality.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(quality["issues"][0]["severity"], "critical");
}

#[test]
fn reference_counting_combines_citation_patterns() {
    let text = "Introduction to the method and results with discussion and conclusion. \
                Smith et al. showed this in [1] and again in (2019). \
                See also [2] and [3].\n\nReferences\n";
    let report = assess_quality(text, &sample_abstract(200));
    // 3 bracketed citations + 1 year + 1 "et al." + the heading = 6, halved.
    assert_eq!(report.reference_count, 3);
}

#[test]
fn figures_and_tables_are_deduplicated() {
    let text = "Figure 1 shows the layout. figure 1 repeats. Fig. 2 adds detail. \
                Table 1 lists values. TABLE 1 repeats. Table 2 extends it.";
    let report = assess_quality(text, "");
    assert_eq!(report.figure_count, 2);
    assert_eq!(report.table_count, 2);
}
