const PROMPT_TEMPLATE: &str = r#"Transform this normal business statement into hilariously over-the-top advertising agency jargon. Make it as buzzword-heavy and pretentious as possible, using terms like "synergise," "ideate," "paradigm," "holistic," "leverage," "circle back," "move the needle," etc. The goal is to satirise corporate speak. Use British English spelling throughout (e.g., "optimise," "realise," "colour," "centre"):

"{text}"

Respond with ONLY the translated jargon version, no explanation."#;

pub fn build_prompt(text: &str) -> String {
    PROMPT_TEMPLATE.replace("{text}", text.trim())
}

const QUOTE_PAIRS: &[(char, char)] = &[
    ('"', '"'),
    ('\'', '\''),
    ('\u{201C}', '\u{201D}'),
    ('\u{2018}', '\u{2019}'),
];

/// Strip one layer of matching quotes the model tends to wrap its answer in
pub fn strip_wrapping_quotes(text: &str) -> String {
    let trimmed = text.trim();
    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = trimmed
            .strip_prefix(*open)
            .and_then(|rest| rest.strip_suffix(*close))
        {
            return inner.trim().to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_trimmed_text() {
        let prompt = build_prompt("  We need to discuss the budget ");
        assert!(prompt.contains("\n\"We need to discuss the budget\"\n"));
        assert!(prompt.contains("British English"));
        assert!(prompt.ends_with("no explanation."));
    }

    #[test]
    fn matching_quotes_are_stripped() {
        assert_eq!(strip_wrapping_quotes("\"Leverage synergies\""), "Leverage synergies");
        assert_eq!(strip_wrapping_quotes(" 'Ideate' "), "Ideate");
        assert_eq!(strip_wrapping_quotes("\u{201C}Pivot\u{201D}"), "Pivot");
    }

    #[test]
    fn unbalanced_quotes_are_kept() {
        assert_eq!(strip_wrapping_quotes("\"Leverage it"), "\"Leverage it");
        assert_eq!(strip_wrapping_quotes("It's 'fine'"), "It's 'fine'");
        assert_eq!(strip_wrapping_quotes("\""), "\"");
    }
}
