use std::fmt;
use std::str::FromStr;

use crate::error::OcrmdError;

/// Tesseract language models to load, in priority order.
///
/// Parsed from `jpn+eng` (Tesseract's own syntax) or `jpn,eng`. Rendered back
/// with `+` so it can be handed straight to `LepTess::new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageHint {
    languages: Vec<String>,
}

impl LanguageHint {
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn primary(&self) -> &str {
        &self.languages[0]
    }
}

impl Default for LanguageHint {
    /// Japanese with an English fallback for mixed documents.
    fn default() -> Self {
        Self {
            languages: vec!["jpn".to_string(), "eng".to_string()],
        }
    }
}

impl FromStr for LanguageHint {
    type Err = OcrmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut languages: Vec<String> = Vec::new();
        for code in s.split(['+', ',']).map(str::trim).filter(|c| !c.is_empty()) {
            if !code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                return Err(OcrmdError::Config(format!(
                    "invalid language code '{code}' in '{s}'"
                )));
            }
            if !languages.iter().any(|l| l == code) {
                languages.push(code.to_string());
            }
        }

        if languages.is_empty() {
            return Err(OcrmdError::Config(format!(
                "no language codes in '{s}'"
            )));
        }

        Ok(Self { languages })
    }
}

impl fmt::Display for LanguageHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.languages.join("+"))
    }
}
