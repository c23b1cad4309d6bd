//! Fixed document wording per output language

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output language for headings and fixed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::En => &ENGLISH,
            Language::Pt => &PORTUGUESE,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "pt" | "pt-br" | "portuguese" => Ok(Language::Pt),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

/// Wording used by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub version: &'static str,
    pub authentication: &'static str,
    pub authentication_note: &'static str,
    pub endpoints: &'static str,
    pub summary: &'static str,
    pub parameters: &'static str,
    pub required: &'static str,
    pub optional: &'static str,
    pub request_example: &'static str,
    pub response_example: &'static str,
}

pub static ENGLISH: Labels = Labels {
    version: "Version",
    authentication: "Authentication",
    authentication_note: "This API requires authentication via Bearer Token (JWT).",
    endpoints: "Endpoints",
    summary: "Summary",
    parameters: "Parameters",
    required: "required",
    optional: "optional",
    request_example: "Request Example",
    response_example: "Response Example",
};

pub static PORTUGUESE: Labels = Labels {
    version: "Versão",
    authentication: "Autenticação",
    authentication_note: "Esta API requer autenticação via Bearer Token (JWT).",
    endpoints: "Endpoints",
    summary: "Resumo",
    parameters: "Parâmetros",
    required: "obrigatório",
    optional: "opcional",
    request_example: "Exemplo de Request (application/json)",
    response_example: "Exemplo de Response",
};

impl Labels {
    pub fn version_line(&self, version: &str) -> String {
        format!("{}: {}", self.version, version)
    }

    pub fn summary_line(&self, summary: &str) -> String {
        format!("{}: {}", self.summary, summary)
    }

    pub fn requirement(&self, required: bool) -> &'static str {
        if required {
            self.required
        } else {
            self.optional
        }
    }

    pub fn response_heading(&self, code: &str) -> String {
        format!("{} ({})", self.response_example, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parsing() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!("pt-BR".parse::<Language>(), Ok(Language::Pt));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde() {
        let lang: Language = serde_json::from_str("\"pt\"").unwrap();
        assert_eq!(lang, Language::Pt);
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
    }

    #[test]
    fn test_formatted_lines() {
        let labels = Language::En.labels();
        assert_eq!(labels.version_line("1.2.0"), "Version: 1.2.0");
        assert_eq!(labels.response_heading("201"), "Response Example (201)");
        assert_eq!(labels.requirement(false), "optional");

        let labels = Language::Pt.labels();
        assert_eq!(labels.version_line("1.2.0"), "Versão: 1.2.0");
        assert_eq!(labels.requirement(true), "obrigatório");
    }
}
