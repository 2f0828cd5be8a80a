use quill_check::{analyze, review, scan_lexical, scan_tone, IssueCategory, QualityLevel, Severity};

#[test]
fn clean_paragraph_is_publishable() {
    let text = "The autumn reading circle gathered beneath the oak trees near the library steps. \
                Each member shared a favorite passage aloud, and quiet applause followed every \
                reading until dusk settled.";
    let result = review(text);
    assert!(
        result.can_publish,
        "Clean text should be publishable, got {:?}",
        result.quality_level
    );
    assert!(
        result.quality_level == QualityLevel::Good || result.quality_level == QualityLevel::Excellent,
        "Clean text should rate Good or Excellent, got {:?}",
        result.quality_level
    );
    assert!(result.tone.is_clean);
    assert!(!result.lexical.has_errors);
}

#[test]
fn score_stays_in_bounds() {
    let inputs = [
        "",
        "damn damn damn!!! BUY NOW click here free money",
        "recieve occured seperate definately necessery grammer suprise oppurtunity goverment enviroment",
        "The protagonist faced the antagonist at the climax of the narrative, where irony and \
         metaphor shaped the resolution of the conflict in the story that night.",
        "a",
        "word word word word word word word word word word word word word word word word word \
         word word word word word",
    ];
    for input in inputs {
        let result = review(input);
        assert!(
            (0..=100).contains(&result.overall_score),
            "Score out of range for {input:?}: {}",
            result.overall_score
        );
    }
}

#[test]
fn review_is_deterministic() {
    let text = "The poets met on Friday. They read alot of verse and drank really good tea!!!";
    assert_eq!(review(text), review(text));
}

#[test]
fn empty_input_returns_empty_review() {
    for input in ["", "   ", " \n\t  "] {
        let result = review(input);
        assert_eq!(result.quality_level, QualityLevel::Empty);
        assert_eq!(result.overall_score, 0);
        assert!(!result.can_publish);
        assert_eq!(result.feedback.len(), 1);
        assert!(result.suggestions.is_empty());
        assert_eq!(result.analysis.word_count, 0);
        assert!(result.tone.is_clean);
    }
}

#[test]
fn flagged_term_blocks_publication() {
    let result = review("damn this is great!!!");
    assert_eq!(result.tone.severity, Severity::High);
    assert!(result.tone.flagged_term_found);
    assert!(!result.can_publish);
    assert_eq!(result.quality_level, QualityLevel::NotReady);
}

#[test]
fn flagged_terms_match_whole_words_only() {
    // "passage" contains "ass" but must not trip the word-boundary match
    let result = scan_tone("A passage about classic literature");
    assert!(result.is_clean, "Got issues: {:?}", result.issues);
    assert!(!result.flagged_term_found);
}

#[test]
fn all_caps_raises_severity_to_medium() {
    let result = scan_tone("HELLO EVERYONE THIS IS AMAZING");
    assert!(
        result.severity >= Severity::Medium,
        "Expected at least medium severity, got {:?}",
        result.severity
    );
    assert!(result
        .issues
        .iter()
        .any(|i| i.category == IssueCategory::Formatting));
}

#[test]
fn excessive_punctuation_raises_severity_to_medium() {
    let result = scan_tone("What a day?? It was something....");
    assert!(result.severity >= Severity::Medium);
    assert!(!result.is_clean);
}

#[test]
fn character_repetition_is_low_severity() {
    let result = scan_tone("This is sooooo wonderful today my friends");
    assert_eq!(result.severity, Severity::Low);
    assert!(result
        .issues
        .iter()
        .any(|i| i.category == IssueCategory::Formatting));
}

#[test]
fn spam_phrases_are_high_severity() {
    let result = scan_tone("Buy now and get free money fast");
    assert_eq!(result.severity, Severity::High);
    assert!(result.issues.iter().any(|i| i.category == IssueCategory::Spam));
}

#[test]
fn severity_is_never_lowered_by_later_findings() {
    // Flagged term (high) followed by a repetition finding (low)
    let result = scan_tone("damn it was sooooo close");
    assert_eq!(result.severity, Severity::High);
    assert!(Severity::None < Severity::Low);
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
}

#[test]
fn misspelling_round_trip() {
    let result = scan_lexical("I recieve your letter.");
    let spelling: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.category == IssueCategory::Spelling)
        .collect();
    assert_eq!(spelling.len(), 1);
    assert_eq!(spelling[0].word, "recieve");
    assert_eq!(spelling[0].suggestions, vec!["receive".to_string()]);

    let full = review("I recieve your letter.");
    assert!(
        full.suggestions
            .iter()
            .any(|s| s.contains("Spelling: \"recieve\"") && s.contains("receive")),
        "Missing spelling suggestion in {:?}",
        full.suggestions
    );
}

#[test]
fn grammar_pattern_detected_with_correction() {
    let result = scan_lexical("alot of good stuff happened");
    let grammar: Vec<_> = result
        .errors
        .iter()
        .filter(|e| e.category == IssueCategory::Grammar)
        .collect();
    assert_eq!(grammar.len(), 1);
    assert_eq!(grammar[0].word, "alot");
    assert!(grammar[0].suggestions[0].contains("a lot"));
    assert_eq!(result.grammar_issues_found, 1);
    // "good" and "stuff" appear once each, below the repetition threshold
    assert_eq!(result.vocabulary_issues_found, 0);
}

#[test]
fn grammar_pattern_counted_once_per_call() {
    let result = scan_lexical("We saw alot of birds and alot of trees.");
    assert_eq!(result.grammar_issues_found, 1);
    let grammar_errors = result
        .errors
        .iter()
        .filter(|e| e.category == IssueCategory::Grammar)
        .count();
    assert_eq!(grammar_errors, 1);
}

#[test]
fn weak_word_flagged_only_when_repeated() {
    let twice = scan_lexical("A good dog had a good day.");
    assert_eq!(twice.vocabulary_issues_found, 0);

    let thrice = scan_lexical("The good dog saw a good friend near the good tree.");
    assert_eq!(thrice.vocabulary_issues_found, 3);
    let vocab: Vec<_> = thrice
        .errors
        .iter()
        .filter(|e| e.category == IssueCategory::Vocabulary)
        .collect();
    assert_eq!(vocab.len(), 3);
    assert!(vocab[0].suggestions.contains(&"excellent".to_string()));
}

#[test]
fn long_words_produce_warnings_not_errors() {
    let result = scan_lexical("Their pseudointellectualism amazed everyone completely");
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("pseudointellectualism"));
    assert!(!result.has_errors);
}

#[test]
fn analyzer_counts_words_sentences_paragraphs() {
    let analysis = analyze("First paragraph. It has two sentences!\n\nSecond paragraph here.");
    assert_eq!(analysis.word_count, 9);
    assert_eq!(analysis.sentence_count, 3);
    assert_eq!(analysis.paragraph_count, 2);
}

#[test]
fn sentence_count_floors_at_one() {
    let analysis = analyze("no terminal punctuation in this line");
    assert_eq!(analysis.sentence_count, 1);
    assert_eq!(analysis.paragraph_count, 1);
}

#[test]
fn empty_text_analysis_is_zeroed() {
    let analysis = analyze("");
    assert_eq!(analysis.word_count, 0);
    assert_eq!(analysis.sentence_count, 0);
    assert_eq!(analysis.readability_score, 0);
    assert_eq!(analysis.readability_level, "N/A");
    assert_eq!(analysis.estimated_reading_time, "0 min");
}

#[test]
fn reading_time_scales_with_word_count() {
    let short = analyze("a few words here");
    assert_eq!(short.estimated_reading_time, "~1 min read");

    let long = "word ".repeat(250);
    let analysis = analyze(&long);
    assert_eq!(analysis.word_count, 250);
    assert_eq!(analysis.estimated_reading_time, "~2 min read");
}

#[test]
fn readability_decreases_with_longer_words() {
    // Same word and sentence counts, longer words in the second text
    let short_words = analyze("ab ab ab ab ab ab ab ab ab ab.");
    let long_words = analyze("abc abc abc abc abc abc abc abc abc abc.");
    assert_eq!(short_words.word_count, long_words.word_count);
    assert_eq!(short_words.sentence_count, long_words.sentence_count);
    assert!(
        short_words.readability_score > long_words.readability_score,
        "Expected {} > {}",
        short_words.readability_score,
        long_words.readability_score
    );
}

#[test]
fn advanced_vocabulary_earns_capped_bonus() {
    let text = "The protagonist faced the antagonist at the climax of the narrative, where irony \
                and metaphor shaped the resolution of the conflict in the story that night.";
    let result = review(text);
    assert_eq!(result.analysis.advanced_vocabulary_count, 8);
    assert!(result
        .feedback
        .iter()
        .any(|f| f.contains("sophisticated vocabulary (8 words)")));
    assert_eq!(result.overall_score, 100);
    assert_eq!(result.quality_level, QualityLevel::Excellent);
}

#[test]
fn spelling_deduction_is_capped() {
    let text = "recieve occured seperate definately necessery grammer suprise oppurtunity \
                goverment enviroment";
    let result = review(text);
    assert!(result
        .feedback
        .iter()
        .any(|f| f.contains("10 spelling error(s) found")));
    // -15 spelling (capped), -10 readability, -10 short length, +5 diversity
    assert_eq!(result.overall_score, 70);
    assert_eq!(result.quality_level, QualityLevel::Good);
}

#[test]
fn short_text_is_not_ready() {
    let result = review("A short test.");
    assert!(!result.can_publish);
    assert_eq!(result.quality_level, QualityLevel::NotReady);
}

#[test]
fn json_output_is_valid() {
    let result = review("A short test.");
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed.get("tone").is_some());
    assert!(parsed.get("lexical").is_some());
    assert!(parsed.get("analysis").is_some());
    assert!(parsed.get("overall_score").is_some());
    assert!(parsed.get("can_publish").is_some());
    assert!(parsed.get("feedback").is_some());
    assert!(parsed.get("suggestions").is_some());
    assert_eq!(parsed["quality_level"], "Not Ready");
    assert_eq!(parsed["tone"]["severity"], "none");
}
