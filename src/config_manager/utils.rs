use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use anyhow::Result;
use regex::Regex;

fn env_placeholder() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Read a configuration file with environment variable substitution
pub fn read_config_text(config_path: &str) -> Result<String> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let mut bytes = fs::read(config_path)?;
    // Remove BOM if present
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        bytes.drain(0..3);
    }
    let content = String::from_utf8(bytes)?;

    Ok(substitute_env_vars(&content, |name| std::env::var(name).ok()))
}

/// Replace `${VAR_NAME}` with the looked-up value; unknown variables are left as written
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_placeholder()
        .replace_all(content, |caps: &regex::Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// True when a value still holds an unresolved `${VAR}` placeholder
pub fn is_unresolved_placeholder(value: &str) -> bool {
    env_placeholder().is_match(value)
}
