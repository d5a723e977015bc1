use crate::dialogue::DialogueError;
use crate::types::Tone;

/// Session configuration, read from the environment at startup.
/// Sentiment thresholds and the burnout window are deliberately not
/// here: those are fixed contract constants, not knobs.
#[derive(Debug, Clone)]
pub struct SessionCfg {
    /// Reply tone. Invalid values are a startup error.
    pub tone: Tone,
    /// Whether the presentation layer should show the feedback
    /// invitation after each reply.
    pub show_feedback_prompt: bool,
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            tone: Tone::Soft,
            show_feedback_prompt: false,
        }
    }
}

impl SessionCfg {
    /// Load from `CARA_TONE` / `CARA_FEEDBACK_PROMPT`. Unset variables
    /// fall back to defaults; a set-but-invalid tone is an error.
    pub fn from_env() -> Result<Self, DialogueError> {
        let d = Self::default();
        let tone = match std::env::var("CARA_TONE") {
            Ok(v) => Tone::parse(&v)?,
            Err(_) => d.tone,
        };
        let show_feedback_prompt = std::env::var("CARA_FEEDBACK_PROMPT")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(d.show_feedback_prompt);
        Ok(Self { tone, show_feedback_prompt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tone_is_soft() {
        assert_eq!(SessionCfg::default().tone, Tone::Soft);
    }

    #[test]
    fn invalid_tone_string_errors() {
        assert!(Tone::parse("loud").is_err());
    }
}
