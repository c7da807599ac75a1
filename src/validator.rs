use tracing::debug;

use crate::config::DEFAULT_MIN_PROMPT_LENGTH;

/// Rejects absent or degenerate prompts: the trimmed text must hold at
/// least `min_length` characters.
pub fn validate_prompt(prompt: Option<&str>, min_length: usize) -> bool {
    let Some(prompt) = prompt else {
        debug!("Rejected prompt: no text produced");
        return false;
    };

    let length = prompt.trim().chars().count();
    if length < min_length {
        debug!("Rejected prompt: {} characters, minimum is {}", length, min_length);
        return false;
    }
    true
}

/// [`validate_prompt`] with the default ten character floor
pub fn is_valid_prompt(prompt: &str) -> bool {
    validate_prompt(Some(prompt), DEFAULT_MIN_PROMPT_LENGTH)
}
