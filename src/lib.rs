use std::collections::{HashMap, HashSet};
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// Tone-issue tier. Findings only ever raise severity, never lower it,
/// so "raise to at least X" is a `max` over the derived order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Profanity,
    Grammar,
    Spelling,
    Vocabulary,
    Spam,
    Formatting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneIssue {
    pub category: IssueCategory,
    pub message: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToneReport {
    pub is_clean: bool,
    pub issues: Vec<ToneIssue>,
    pub severity: Severity,
    pub suggestions: Vec<String>,
    pub flagged_term_found: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalError {
    pub word: String,
    /// Byte offset of the match in the input text.
    pub position: usize,
    pub suggestions: Vec<String>,
    pub category: IssueCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexicalReport {
    pub has_errors: bool,
    pub errors: Vec<LexicalError>,
    pub warnings: Vec<String>,
    pub grammar_issues_found: usize,
    pub vocabulary_issues_found: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentAnalysis {
    pub word_count: usize,
    pub character_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub average_word_length: f64,
    pub average_sentence_length: f64,
    pub readability_score: i32,
    pub readability_level: String,
    pub estimated_reading_time: String,
    pub vocabulary_diversity: u32,
    pub advanced_vocabulary_count: usize,
    pub weak_vocabulary_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QualityLevel {
    Empty,
    #[serde(rename = "Not Ready")]
    NotReady,
    #[serde(rename = "Needs Work")]
    NeedsWork,
    Fair,
    Good,
    Excellent,
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QualityLevel::Empty => "Empty",
            QualityLevel::NotReady => "Not Ready",
            QualityLevel::NeedsWork => "Needs Work",
            QualityLevel::Fair => "Fair",
            QualityLevel::Good => "Good",
            QualityLevel::Excellent => "Excellent",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullReview {
    pub tone: ToneReport,
    pub lexical: LexicalReport,
    pub analysis: ContentAnalysis,
    pub overall_score: i32,
    pub can_publish: bool,
    pub feedback: Vec<String>,
    pub suggestions: Vec<String>,
    pub quality_level: QualityLevel,
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    caps_ratio_threshold: f64,
    caps_min_chars: usize,
    char_run_min: usize,
    long_word_len: usize,
    weak_word_repeat_min: usize,
    reading_words_per_minute: usize,
    tone_high_penalty: i32,
    tone_medium_penalty: i32,
    tone_low_penalty: i32,
    spelling_penalty: i32,
    spelling_penalty_floor: i32,
    grammar_penalty: i32,
    grammar_penalty_floor: i32,
    vocabulary_penalty: i32,
    vocabulary_penalty_floor: i32,
    readability_high_min: i32,
    readability_mid_min: i32,
    readability_low_max: i32,
    readability_bonus: i32,
    readability_penalty: i32,
    diversity_low_max: u32,
    diversity_high_min: u32,
    diversity_penalty: i32,
    diversity_bonus: i32,
    advanced_bonus_cap: i32,
    short_words_max: usize,
    short_penalty: i32,
    long_words_min: usize,
    long_penalty: i32,
    paragraph_advice_min_words: usize,
    min_publish_words: usize,
    publish_score_min: i32,
    score_min: i32,
    score_max: i32,
    tier_excellent_min: i32,
    tier_good_min: i32,
    tier_fair_min: i32,
}

static HP: Hyperparameters = Hyperparameters {
    caps_ratio_threshold: 0.5,
    caps_min_chars: 10,
    char_run_min: 5,
    long_word_len: 15,
    weak_word_repeat_min: 2,
    reading_words_per_minute: 200,
    tone_high_penalty: -50,
    tone_medium_penalty: -20,
    tone_low_penalty: -5,
    spelling_penalty: -2,
    spelling_penalty_floor: -15,
    grammar_penalty: -2,
    grammar_penalty_floor: -15,
    vocabulary_penalty: -1,
    vocabulary_penalty_floor: -10,
    readability_high_min: 80,
    readability_mid_min: 60,
    readability_low_max: 30,
    readability_bonus: 5,
    readability_penalty: -10,
    diversity_low_max: 40,
    diversity_high_min: 60,
    diversity_penalty: -8,
    diversity_bonus: 5,
    advanced_bonus_cap: 10,
    short_words_max: 20,
    short_penalty: -10,
    long_words_min: 5000,
    long_penalty: -5,
    paragraph_advice_min_words: 50,
    min_publish_words: 10,
    publish_score_min: 30,
    score_min: 0,
    score_max: 100,
    tier_excellent_min: 80,
    tier_good_min: 60,
    tier_fair_min: 40,
};

// ---------------------------------------------------------------------------
// Lexicon tables
// ---------------------------------------------------------------------------

static FLAGGED_TERMS: &[&str] = &[
    // Profanity
    "damn",
    "hell",
    "crap",
    "piss",
    "shit",
    "ass",
    "bastard",
    "bitch",
    // Hate speech indicators
    "explicit",
    "offensive",
    "inappropriate",
    "hateful",
    "slur",
    "abuse",
    "violence",
    "gore",
    "racist",
    "sexist",
    "discriminat",
    // Spam / scam
    "spam",
    "scam",
    "fraud",
    "illegal",
    "bitcoin",
    "crypto",
    "click here",
    "buy now",
    "free money",
    "work from home",
];

static SPAM_PHRASES: &[&str] = &[
    "click here",
    "buy now",
    "free money",
    "work from home",
    "bitcoin",
    "cryptocurrency",
    "limited time",
    "act now",
];

static GRAMMAR_PATTERNS: &[(&str, &str)] = &[
    ("not no", "double negative"),
    ("cannot hardly", "double negative"),
    ("not nothing", "double negative"),
    ("their is", "should be \"there is\""),
    ("its going", "should be \"it's going\""),
    ("your going", "should be \"you're going\""),
    ("alot", "should be \"a lot\""),
    ("have went", "should be \"have gone\""),
    ("should of", "should be \"should have\""),
    ("would of", "should be \"would have\""),
    ("could of", "should be \"could have\""),
    ("in regards to", "consider using \"regarding\" instead"),
];

static WEAK_VOCABULARY_ENTRIES: &[(&str, &[&str])] = &[
    ("very", &["extremely", "incredibly", "remarkably", "notably"]),
    ("really", &["genuinely", "truly", "certainly", "absolutely"]),
    ("good", &["excellent", "outstanding", "superb", "exceptional"]),
    ("bad", &["poor", "inadequate", "substandard", "inferior"]),
    ("nice", &["pleasant", "delightful", "wonderful", "charming"]),
    ("things", &["elements", "aspects", "components", "factors"]),
    ("stuff", &["materials", "items", "objects", "content"]),
    ("got", &["obtained", "acquired", "received", "secured"]),
    ("a lot", &["numerous", "considerable", "substantial", "extensive"]),
    ("just", &["simply", "merely", "only"]),
];

static WEAK_VOCABULARY: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| WEAK_VOCABULARY_ENTRIES.iter().copied().collect());

static ADVANCED_VOCABULARY: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "metaphor",
        "simile",
        "alliteration",
        "protagonist",
        "antagonist",
        "climax",
        "denouement",
        "exposition",
        "conflict",
        "resolution",
        "narrative",
        "dialogue",
        "monologue",
        "soliloquy",
        "foreshadow",
        "irony",
        "paradox",
        "oxymoron",
        "hyperbole",
        "personification",
        "imagination",
        "creativity",
        "storytelling",
        "literature",
        "poetic",
        "lyrical",
        "prose",
        "verse",
        "stanza",
        "couplet",
        "eloquent",
        "nostalgic",
        "melancholic",
        "ethereal",
        "luminous",
        "ephemeral",
    ]
    .into_iter()
    .collect()
});

static MISSPELLING_ENTRIES: &[(&str, &[&str])] = &[
    ("recieve", &["receive"]),
    ("occured", &["occurred"]),
    ("seperate", &["separate"]),
    ("definately", &["definitely"]),
    ("necessery", &["necessary"]),
    ("grammer", &["grammar"]),
    ("suprise", &["surprise"]),
    ("oppurtunity", &["opportunity"]),
    ("goverment", &["government"]),
    ("enviroment", &["environment"]),
    ("freind", &["friend"]),
    ("wich", &["which", "witch"]),
    ("wierd", &["weird"]),
    ("occassion", &["occasion"]),
    ("untill", &["until"]),
    ("begining", &["beginning"]),
    ("comming", &["coming"]),
    ("writting", &["writing"]),
    ("reccommend", &["recommend"]),
    ("existance", &["existence"]),
    ("concious", &["conscious"]),
    ("acheive", &["achieve"]),
    ("bussiness", &["business"]),
    ("succesful", &["successful"]),
    ("sincerly", &["sincerely"]),
    ("adress", &["address"]),
    ("assesment", &["assessment"]),
    ("judgement", &["judgment"]),
    ("millenium", &["millennium"]),
];

static MISSPELLINGS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| MISSPELLING_ENTRIES.iter().copied().collect());

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static FLAGGED_TERM_RES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    FLAGGED_TERMS
        .iter()
        .map(|term| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))).unwrap();
            (*term, re)
        })
        .collect()
});

static EXCESSIVE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!?]{2,}|\.{4,}").unwrap());

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n+").unwrap());

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Strip leading/trailing punctuation from a token and lowercase it.
fn clean_token(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

fn has_char_run(text: &str, min_run: usize) -> bool {
    let mut run = 0usize;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            run = 1;
            prev = Some(c);
        }
        if run >= min_run {
            return true;
        }
    }
    false
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn readability_level_for(score: i32) -> &'static str {
    if score >= 90 {
        "Very Easy"
    } else if score >= 80 {
        "Easy"
    } else if score >= 70 {
        "Fairly Easy"
    } else if score >= 60 {
        "Standard"
    } else if score >= 50 {
        "Fairly Difficult"
    } else if score >= 30 {
        "Difficult"
    } else {
        "Very Difficult"
    }
}

impl ContentAnalysis {
    fn empty() -> Self {
        ContentAnalysis {
            word_count: 0,
            character_count: 0,
            sentence_count: 0,
            paragraph_count: 0,
            average_word_length: 0.0,
            average_sentence_length: 0.0,
            readability_score: 0,
            readability_level: "N/A".to_string(),
            estimated_reading_time: "0 min".to_string(),
            vocabulary_diversity: 0,
            advanced_vocabulary_count: 0,
            weak_vocabulary_count: 0,
        }
    }
}

impl ToneReport {
    fn clean() -> Self {
        ToneReport {
            is_clean: true,
            issues: vec![],
            severity: Severity::None,
            suggestions: vec![],
            flagged_term_found: false,
        }
    }
}

impl LexicalReport {
    fn clean() -> Self {
        LexicalReport {
            has_errors: false,
            errors: vec![],
            warnings: vec![],
            grammar_issues_found: 0,
            vocabulary_issues_found: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tone scanner
// ---------------------------------------------------------------------------

pub fn scan_tone(text: &str) -> ToneReport {
    let mut issues: Vec<ToneIssue> = Vec::new();
    let mut suggestions: Vec<String> = Vec::new();
    let mut severity = Severity::None;
    let mut flagged_term_found = false;

    let lower = text.to_lowercase();

    for (term, re) in FLAGGED_TERM_RES.iter() {
        if re.is_match(text) {
            let suggestion =
                format!("Remove or replace the word \"{term}\" - it may be offensive to readers");
            issues.push(ToneIssue {
                category: IssueCategory::Profanity,
                message: format!("Inappropriate content detected: \"{term}\""),
                severity: Severity::High,
                suggestion: Some(suggestion.clone()),
            });
            suggestions.push(suggestion);
            severity = Severity::High;
            flagged_term_found = true;
        }
    }

    if EXCESSIVE_PUNCT_RE.is_match(text) {
        let suggestion = "Use single punctuation marks for a more professional tone".to_string();
        issues.push(ToneIssue {
            category: IssueCategory::Formatting,
            message: "Excessive punctuation detected".to_string(),
            severity: Severity::Medium,
            suggestion: Some(suggestion.clone()),
        });
        suggestions.push(suggestion);
        severity = severity.max(Severity::Medium);
    }

    let char_count = text.chars().count();
    if char_count > HP.caps_min_chars {
        let caps = text.chars().filter(char::is_ascii_uppercase).count();
        if caps as f64 / char_count as f64 > HP.caps_ratio_threshold {
            let suggestion =
                "Mix uppercase and lowercase for better readability and tone".to_string();
            issues.push(ToneIssue {
                category: IssueCategory::Formatting,
                message: "Excessive uppercase text detected".to_string(),
                severity: Severity::Medium,
                suggestion: Some(suggestion.clone()),
            });
            suggestions.push(suggestion);
            severity = severity.max(Severity::Medium);
        }
    }

    if has_char_run(text, HP.char_run_min) {
        let suggestion =
            "Use proper spelling and punctuation instead of repeated characters".to_string();
        issues.push(ToneIssue {
            category: IssueCategory::Formatting,
            message: "Excessive character repetition detected".to_string(),
            severity: Severity::Low,
            suggestion: Some(suggestion.clone()),
        });
        suggestions.push(suggestion);
        severity = severity.max(Severity::Low);
    }

    if SPAM_PHRASES.iter().any(|p| lower.contains(p)) {
        let suggestion = "Remove promotional or sales language from your content".to_string();
        issues.push(ToneIssue {
            category: IssueCategory::Spam,
            message: "Spam-like content detected".to_string(),
            severity: Severity::High,
            suggestion: Some(suggestion.clone()),
        });
        suggestions.push(suggestion);
        severity = Severity::High;
    }

    ToneReport {
        is_clean: issues.is_empty() && !flagged_term_found,
        issues,
        severity,
        suggestions,
        flagged_term_found,
    }
}

// ---------------------------------------------------------------------------
// Spelling, grammar, and vocabulary scanner
// ---------------------------------------------------------------------------

pub fn scan_lexical(text: &str) -> LexicalReport {
    let mut errors: Vec<LexicalError> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let mut grammar_issues_found = 0usize;
    let mut vocabulary_issues_found = 0usize;

    let lower = text.to_lowercase();

    // Occurrence counts of cleaned tokens, for the weak-word repetition rule
    let mut token_counts: HashMap<String, usize> = HashMap::new();
    for m in TOKEN_RE.find_iter(text) {
        let clean = clean_token(m.as_str());
        if !clean.is_empty() {
            *token_counts.entry(clean).or_insert(0) += 1;
        }
    }

    for m in TOKEN_RE.find_iter(text) {
        let token = m.as_str();
        let clean = clean_token(token);
        if clean.is_empty() {
            continue;
        }

        if let Some(candidates) = MISSPELLINGS.get(clean.as_str()) {
            errors.push(LexicalError {
                word: clean.clone(),
                position: m.start(),
                suggestions: candidates.iter().map(|s| s.to_string()).collect(),
                category: IssueCategory::Spelling,
            });
        }

        if let Some(synonyms) = WEAK_VOCABULARY.get(clean.as_str()) {
            let occurrences = token_counts.get(clean.as_str()).copied().unwrap_or(0);
            if occurrences > HP.weak_word_repeat_min {
                errors.push(LexicalError {
                    word: clean.clone(),
                    position: m.start(),
                    suggestions: synonyms.iter().map(|s| s.to_string()).collect(),
                    category: IssueCategory::Vocabulary,
                });
                vocabulary_issues_found += 1;
            }
        }

        if clean.chars().count() > HP.long_word_len && !ADVANCED_VOCABULARY.contains(clean.as_str())
        {
            warnings.push(format!(
                "Long word \"{token}\" - consider using simpler alternatives"
            ));
        }
    }

    // Each grammar pattern is checked once per call, not once per token
    for (pattern, correction) in GRAMMAR_PATTERNS {
        if let Some(position) = lower.find(pattern) {
            errors.push(LexicalError {
                word: pattern.to_string(),
                position,
                suggestions: vec![correction.to_string()],
                category: IssueCategory::Grammar,
            });
            grammar_issues_found += 1;
        }
    }

    LexicalReport {
        has_errors: !errors.is_empty(),
        errors,
        warnings,
        grammar_issues_found,
        vocabulary_issues_found,
    }
}

// ---------------------------------------------------------------------------
// Statistical analysis
// ---------------------------------------------------------------------------

pub fn analyze(text: &str) -> ContentAnalysis {
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();
    if word_count == 0 {
        return ContentAnalysis::empty();
    }

    let sentence_count = SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);
    let paragraph_count = PARAGRAPH_SPLIT_RE
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count()
        .max(1);

    let character_count = text.chars().count();
    let chars_excl_ws = text.chars().filter(|c| !c.is_whitespace()).count();

    let distinct: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let vocabulary_diversity = ((distinct.len() as f64 / word_count as f64) * 100.0).round() as u32;

    let mut advanced_vocabulary_count = 0usize;
    let mut weak_vocabulary_count = 0usize;
    for word in &words {
        let clean = clean_token(word);
        if ADVANCED_VOCABULARY.contains(clean.as_str()) {
            advanced_vocabulary_count += 1;
        }
        if WEAK_VOCABULARY.contains_key(clean.as_str()) {
            weak_vocabulary_count += 1;
        }
    }

    // Flesch Reading Ease over words-per-sentence and characters-per-word
    let reading_ease = 206.835
        - 1.015 * (word_count as f64 / sentence_count as f64)
        - 84.6 * (chars_excl_ws as f64 / word_count as f64);
    let readability_score = reading_ease.clamp(0.0, 100.0).round() as i32;

    let minutes = word_count.div_ceil(HP.reading_words_per_minute);
    let estimated_reading_time = if minutes == 0 {
        "< 1 min".to_string()
    } else {
        format!("~{minutes} min read")
    };

    ContentAnalysis {
        word_count,
        character_count,
        sentence_count,
        paragraph_count,
        average_word_length: round2(chars_excl_ws as f64 / word_count as f64),
        average_sentence_length: round2(word_count as f64 / sentence_count as f64),
        readability_score,
        readability_level: readability_level_for(readability_score).to_string(),
        estimated_reading_time,
        vocabulary_diversity,
        advanced_vocabulary_count,
        weak_vocabulary_count,
    }
}

// ---------------------------------------------------------------------------
// Review aggregation
// ---------------------------------------------------------------------------

pub fn review(text: &str) -> FullReview {
    if text.trim().is_empty() {
        return FullReview {
            tone: ToneReport::clean(),
            lexical: LexicalReport::clean(),
            analysis: ContentAnalysis::empty(),
            overall_score: 0,
            can_publish: false,
            feedback: vec!["Your submission is empty. Please write something!".to_string()],
            suggestions: vec![],
            quality_level: QualityLevel::Empty,
        };
    }

    let tone = scan_tone(text);
    let lexical = scan_lexical(text);
    let analysis = analyze(text);

    let mut score = HP.score_max;
    let mut feedback: Vec<String> = Vec::new();
    let mut suggestions: Vec<String> = Vec::new();

    match tone.severity {
        Severity::High => {
            score += HP.tone_high_penalty;
            feedback.push(format!("{} serious issue(s) detected", tone.issues.len()));
            suggestions.extend(tone.suggestions.iter().cloned());
        }
        Severity::Medium => {
            score += HP.tone_medium_penalty;
            feedback.push(format!("{} moderation issue(s)", tone.issues.len()));
            suggestions.extend(tone.suggestions.iter().cloned());
        }
        Severity::Low => {
            score += HP.tone_low_penalty;
            feedback.push("Minor tone issue(s) detected".to_string());
        }
        Severity::None => {}
    }

    let spelling: Vec<&LexicalError> = lexical
        .errors
        .iter()
        .filter(|e| e.category == IssueCategory::Spelling)
        .collect();
    if !spelling.is_empty() {
        score += (spelling.len() as i32 * HP.spelling_penalty).max(HP.spelling_penalty_floor);
        feedback.push(format!("{} spelling error(s) found", spelling.len()));
        for error in &spelling {
            suggestions.push(format!(
                "Spelling: \"{}\" → {}",
                error.word,
                error.suggestions.join(" or ")
            ));
        }
    }

    let grammar: Vec<&LexicalError> = lexical
        .errors
        .iter()
        .filter(|e| e.category == IssueCategory::Grammar)
        .collect();
    if !grammar.is_empty() {
        score += (grammar.len() as i32 * HP.grammar_penalty).max(HP.grammar_penalty_floor);
        feedback.push(format!("{} grammar issue(s) found", grammar.len()));
        for error in &grammar {
            suggestions.push(format!(
                "Grammar: \"{}\" → {}",
                error.word,
                error.suggestions.join(" or ")
            ));
        }
    }

    let vocabulary: Vec<&LexicalError> = lexical
        .errors
        .iter()
        .filter(|e| e.category == IssueCategory::Vocabulary)
        .collect();
    if !vocabulary.is_empty() {
        score += (vocabulary.len() as i32 * HP.vocabulary_penalty).max(HP.vocabulary_penalty_floor);
        feedback.push(format!("{} vocabulary suggestion(s)", vocabulary.len()));
        for error in &vocabulary {
            suggestions.push(format!(
                "Vocabulary: Use \"{}\" instead of \"{}\"",
                error.suggestions.join(", "),
                error.word
            ));
        }
    }

    if analysis.readability_score > HP.readability_high_min {
        score += HP.readability_bonus;
        feedback.push("Excellent readability".to_string());
    } else if analysis.readability_score > HP.readability_mid_min {
        feedback.push("Good readability".to_string());
    } else if analysis.readability_score < HP.readability_low_max {
        score += HP.readability_penalty;
        feedback.push("Readability needs improvement - use shorter sentences".to_string());
        suggestions.push("Break sentences into smaller chunks for clarity".to_string());
    }

    if analysis.vocabulary_diversity < HP.diversity_low_max {
        score += HP.diversity_penalty;
        feedback.push("Low vocabulary diversity - consider using synonyms".to_string());
        suggestions.push("Vary your word choices throughout the text".to_string());
    } else if analysis.vocabulary_diversity > HP.diversity_high_min {
        score += HP.diversity_bonus;
        feedback.push("Great vocabulary diversity".to_string());
    }

    if analysis.advanced_vocabulary_count > 0 {
        score += (analysis.advanced_vocabulary_count as i32).min(HP.advanced_bonus_cap);
        feedback.push(format!(
            "Excellent use of sophisticated vocabulary ({} words)",
            analysis.advanced_vocabulary_count
        ));
    }

    if analysis.word_count < HP.short_words_max {
        score += HP.short_penalty;
        feedback.push("Content is too short - expand your thoughts".to_string());
        suggestions.push("Aim for at least 20-50 words for meaningful submissions".to_string());
    } else if analysis.word_count > HP.long_words_min {
        score += HP.long_penalty;
        feedback.push("Content is quite long - consider breaking it into sections".to_string());
        suggestions.push("For very long pieces, consider adding headings or sections".to_string());
    } else {
        feedback.push(format!(
            "Content length is appropriate ({} words)",
            analysis.word_count
        ));
    }

    // Structure advice only, no score change
    if analysis.paragraph_count <= 1 && analysis.word_count > HP.paragraph_advice_min_words {
        suggestions.push("Consider adding paragraph breaks for better structure".to_string());
    }

    let overall_score = score.clamp(HP.score_min, HP.score_max);

    let (quality_level, can_publish) =
        if tone.severity == Severity::High || analysis.word_count < HP.min_publish_words {
            (QualityLevel::NotReady, false)
        } else if overall_score >= HP.tier_excellent_min {
            (QualityLevel::Excellent, true)
        } else if overall_score >= HP.tier_good_min {
            (QualityLevel::Good, true)
        } else if overall_score >= HP.tier_fair_min {
            (QualityLevel::Fair, true)
        } else {
            (QualityLevel::NeedsWork, overall_score >= HP.publish_score_min)
        };

    FullReview {
        tone,
        lexical,
        analysis,
        overall_score,
        can_publish,
        feedback,
        suggestions,
        quality_level,
    }
}
