//! Blocklist heuristics for user-supplied text.
//!
//! Coarse: some legitimate sentences ("our password policy") are blocked and
//! determined adversarial input will get through.

use regex::Regex;

/// Characters accepted by every profile
pub const ALLOWED_CHARS: &str = r#"^[A-Za-z0-9_\s.,!?;:'"()\-@#$%&+=\[\]{}|\\/]*$"#;

/// Single character repeated this many times after its first occurrence
pub const MAX_REPEATS: usize = 50;

const DEFAULT_PATTERNS: &[&str] = &[
    // prompt injection
    r"(?i)\b(ignore|disregard|forget|override)\s+(previous|prior|above|earlier)\s+(instruction|prompt|rule|direction)",
    r"(?i)\b(system|admin|root|administrator)\s+(command|mode|access|privilege)",
    r"(?i)\b(execute|run|eval|script|code|function)\s*\(",
    // credential exfiltration
    r"(?i)\b(api[_\s]?key|secret|token|password|credential)",
    // script injection
    r"(?i)<script|javascript:|data:text/html|vbscript:",
];

const STRICT_PATTERNS: &[&str] = &[
    r"(?i)\b(hack|exploit|vulnerability|bypass|circumvent)",
    r"(?i)\b(sql|union|select|drop|delete|insert|update)\s",
    r"[<>{}]",
];

#[derive(Debug, Clone)]
pub enum BlockedPattern {
    Regex(Regex),
    /// A run of one character followed by at least `min_repeats` copies of itself.
    /// Line breaks (including U+2028 and U+2029) never count towards a run.
    Repetition { min_repeats: usize },
}

impl BlockedPattern {
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Regex(Regex::new(pattern)?))
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Regex(re) => re.is_match(text),
            Self::Repetition { min_repeats } => has_repeated_run(text, *min_repeats),
        }
    }
}

fn has_repeated_run(text: &str, min_repeats: usize) -> bool {
    let mut previous = None;
    let mut repeats = 0;

    for c in text.chars() {
        if matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
            previous = None;
            repeats = 0;
            continue;
        }
        if previous == Some(c) {
            repeats += 1;
            if repeats >= min_repeats {
                return true;
            }
        } else {
            previous = Some(c);
            repeats = 0;
        }
    }

    false
}

fn compile(patterns: &[&str]) -> Vec<BlockedPattern> {
    patterns
        .iter()
        .map(|p| BlockedPattern::regex(p).expect("built-in blocklist pattern is valid"))
        .collect()
}

pub fn default_patterns() -> Vec<BlockedPattern> {
    let mut patterns = compile(DEFAULT_PATTERNS);
    patterns.push(BlockedPattern::Repetition {
        min_repeats: MAX_REPEATS,
    });
    patterns
}

pub fn strict_patterns() -> Vec<BlockedPattern> {
    let mut patterns = default_patterns();
    patterns.extend(compile(STRICT_PATTERNS));
    patterns
}
