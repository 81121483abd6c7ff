use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::phrase_bank::{lookup, AGENCY_PREFIXES, AGENCY_SUFFIXES, BUZZWORDS, JARGON_MAP};

/// Chance of prefixing an eligible word with a buzzword
pub const BUZZWORD_PROBABILITY: f64 = 0.3;

/// Words of this many characters or fewer never get a buzzword
const MIN_BUZZWORD_TARGET_LEN: usize = 3;

/// One alternation over every jargon key, multi-word keys first.
///
/// A single pass means "new ideas" is consumed before "ideas" can match, and
/// substituted jargon is never itself substituted again.
fn jargon_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let mut keys: Vec<&str> = JARGON_MAP.iter().map(|(normal, _)| *normal).collect();
        keys.sort_by(|a, b| {
            let words = |s: &str| s.split_whitespace().count();
            words(b).cmp(&words(a)).then(b.len().cmp(&a.len()))
        });
        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("jargon pattern is valid")
    })
}

/// Replace every known phrase with its agency equivalent
pub fn apply_jargon(text: &str) -> String {
    jargon_pattern()
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            lookup(&matched.to_lowercase())
                .map(str::to_string)
                .unwrap_or_else(|| matched.to_string())
        })
        .into_owned()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rule-based rewrite used when the AI path is unavailable.
///
/// Output is always `"{prefix} {body} {suffix}."` with a prefix and suffix
/// from the fixed phrase banks.
pub fn transform<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let translated = apply_jargon(&text.to_lowercase());

    let body = translated
        .split(' ')
        .map(|word| {
            let roll = rng.gen_bool(BUZZWORD_PROBABILITY);
            if roll && word.chars().count() > MIN_BUZZWORD_TARGET_LEN {
                let buzzword = BUZZWORDS.choose(rng).copied().unwrap_or_default();
                format!("{} {}", buzzword, word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let prefix = AGENCY_PREFIXES.choose(rng).copied().unwrap_or_default();
    let suffix = AGENCY_SUFFIXES.choose(rng).copied().unwrap_or_default();

    format!("{} {} {}.", prefix, capitalize_first(&body), suffix)
}

/// [`transform`] on the thread-local RNG
pub fn fallback_translation(text: &str) -> String {
    transform(text, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Never rolls under 0.3, so no buzzwords are inserted; phrase picks land on index 0
    fn no_buzzwords() -> StepRng {
        StepRng::new(1 << 63, 0)
    }

    #[test]
    fn multi_word_keys_take_precedence() {
        assert_eq!(
            apply_jargon("let's think of some new ideas"),
            "let's ideate of some disruptive ideation"
        );
        assert_eq!(apply_jargon("good ideas"), "best-in-class blue-sky thinking");
    }

    #[test]
    fn substitutions_are_not_chained() {
        // "social amplification strategy" must not have "strategy" rewritten again
        assert_eq!(apply_jargon("social media"), "social amplification strategy");
    }

    #[test]
    fn only_whole_words_are_replaced() {
        assert_eq!(apply_jargon("applesauce and happy apps"), "applesauce and happy apps");
        assert_eq!(apply_jargon("the app."), "the mobile-first platform.");
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(apply_jargon("BUDGET Meeting"), "investment allocation alignment session");
    }

    #[test]
    fn output_is_wrapped_in_prefix_and_suffix() {
        let mut rng = StdRng::seed_from_u64(7);
        for input in ["We need to discuss the budget", "x", "The deadline is next week"] {
            let out = transform(input, &mut rng);
            assert!(
                AGENCY_PREFIXES.iter().any(|p| out.starts_with(p)),
                "unexpected prefix: {}",
                out
            );
            assert!(
                AGENCY_SUFFIXES.iter().any(|s| out.ends_with(&format!("{}.", s))),
                "unexpected suffix: {}",
                out
            );
        }
    }

    #[test]
    fn body_is_capitalized_without_buzzwords() {
        let out = transform("We need to discuss the budget", &mut no_buzzwords());
        assert_eq!(
            out,
            "Let's action on We need to deep-dive into the investment allocation to drive maximum ROI."
        );
    }

    #[test]
    fn buzzwords_only_precede_long_words() {
        // always rolls under 0.3
        let mut rng = StepRng::new(0, 0);
        let out = transform("go to the big meeting", &mut rng);
        let body_start = out.find("Go to the ").expect("short words untouched");
        assert!(out[body_start..].contains("enterprise-scale"), "{}", out);
        assert!(BUZZWORDS.iter().any(|b| out.contains(&format!("{} alignment", b))), "{}", out);
    }

    #[test]
    fn empty_input_still_produces_text() {
        let out = fallback_translation("");
        assert!(!out.is_empty());
        assert!(out.ends_with('.'));
    }
}
