//! Text-to-speech output for chat replies.

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Instant;
use tokio::process::Command;

use crate::models::Language;

fn markup() -> &'static Regex {
    static MARKUP: OnceLock<Regex> = OnceLock::new();
    MARKUP.get_or_init(|| Regex::new(r"[*_~`]").unwrap())
}

fn newlines() -> &'static Regex {
    static NEWLINES: OnceLock<Regex> = OnceLock::new();
    NEWLINES.get_or_init(|| Regex::new(r"\n+").unwrap())
}

/// Strips markdown emphasis characters and folds line breaks into spaces.
pub fn clean_for_speech(text: &str) -> String {
    let text = markup().replace_all(text, "");
    newlines().replace_all(&text, " ").into_owned()
}

/// Speaks replies through an external synthesizer such as `espeak-ng`.
pub struct Speaker {
    command: String,
    enabled: bool,
}

impl Speaker {
    pub fn new(command: &str, enabled: bool) -> Self {
        Self {
            command: command.to_string(),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Arguments for an espeak-compatible command line.
    pub fn arguments(text: &str, language: Language) -> Vec<String> {
        // espeak speaks at 175 words per minute by default
        let words_per_minute = (175.0 * language.speech_rate()).round() as u32;
        vec![
            "-v".to_string(),
            language.voice_tag().to_lowercase(),
            "-s".to_string(),
            words_per_minute.to_string(),
            text.to_string(),
        ]
    }

    pub async fn speak(&self, text: &str, language: Language) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let text = clean_for_speech(text);
        if text.trim().is_empty() {
            debug!("Nothing to speak");
            return Ok(());
        }

        let start = Instant::now();
        let output = Command::new(&self.command)
            .args(Self::arguments(&text, language))
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.command))?;

        if !output.status.success() {
            bail!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        debug!("speak took: {} ms", start.elapsed().as_millis());
        Ok(())
    }

    /// Like [`Speaker::speak`] but only logs failures.
    pub async fn say(&self, text: &str, language: Language) {
        if let Err(e) = self.speak(text, language).await {
            warn!("Text-to-speech failed: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_for_speech() {
        assert_eq!(
            clean_for_speech("**Water** your _plants_\n\nnow ~please~ `ok`"),
            "Water your plants now please ok"
        );
        assert_eq!(clean_for_speech("line one\nline two"), "line one line two");
    }

    #[test]
    fn test_arguments_follow_language() {
        let args = Speaker::arguments("مرحبا", Language::Ar);
        assert_eq!(args, vec!["-v", "ar-sa", "-s", "140", "مرحبا"]);
        let args = Speaker::arguments("hello", Language::En);
        assert_eq!(args[1], "en-us");
        assert_eq!(args.last().map(String::as_str), Some("hello"));
    }

    #[tokio::test]
    async fn test_disabled_speaker_is_silent() {
        let speaker = Speaker::new("definitely-not-a-tts-binary", false);
        assert!(speaker.speak("hello", Language::En).await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_text_is_skipped() {
        let speaker = Speaker::new("definitely-not-a-tts-binary", true);
        assert!(speaker.speak(" ** \n ", Language::En).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_command_is_an_error() {
        let speaker = Speaker::new("definitely-not-a-tts-binary", true);
        assert!(speaker.speak("hello", Language::En).await.is_err());
    }
}
