use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for labels, advice and prompts.
///
/// Unknown tags resolve to English, so a client sending `"fr"` still gets an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Name of the language as written in an LLM instruction.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "Arabic",
        }
    }

    /// BCP 47 tag handed to the speech collaborators.
    pub fn voice_tag(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Ar => "ar-SA",
        }
    }

    /// Speaking rate relative to normal speed.
    pub fn speech_rate(&self) -> f32 {
        match self {
            Language::En => 0.9,
            Language::Ar => 0.8,
        }
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "ar" | "ar-sa" | "arabic" => Language::Ar,
            _ => Language::En,
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        Language::from(value.as_str())
    }
}

impl FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::from(s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_is_english() {
        assert_eq!(Language::from("fr"), Language::En);
        assert_eq!(Language::from(""), Language::En);
        assert_eq!(Language::from("AR"), Language::Ar);
    }

    #[test]
    fn test_deserialize_lenient() {
        let lang: Language = serde_json::from_str("\"ar\"").unwrap();
        assert_eq!(lang, Language::Ar);
        let lang: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, Language::En);
        assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
    }
}
