use std::str::FromStr;

use crate::error::LoggerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiStyle {
    Url,
    Section,
    Reminder,
    Error,
    Start,
    Complete,
    Bold,
}

impl AnsiStyle {
    fn sgr(self) -> &'static str {
        match self {
            Self::Url => "4;36",
            Self::Section => "1;35",
            Self::Reminder => "1;33",
            Self::Error => "1;31",
            Self::Start => "1;36",
            Self::Complete => "1;32",
            Self::Bold => "1",
        }
    }
}

impl FromStr for AnsiStyle {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "URL" => Ok(Self::Url),
            "SECTION" => Ok(Self::Section),
            "REMINDER" => Ok(Self::Reminder),
            "ERROR" => Ok(Self::Error),
            "START" => Ok(Self::Start),
            "COMPLETE" => Ok(Self::Complete),
            "BOLD" => Ok(Self::Bold),
            _ => Err(LoggerError::UnknownStyle(s.to_string())),
        }
    }
}

pub fn apply_ansi(style: AnsiStyle, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", style.sgr(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_text_in_sgr_codes() {
        assert_eq!(
            apply_ansi(AnsiStyle::Url, "https://hashscan.io"),
            "\x1b[4;36mhttps://hashscan.io\x1b[0m"
        );
    }

    #[test]
    fn style_names_are_case_insensitive() {
        assert_eq!("url".parse::<AnsiStyle>().unwrap(), AnsiStyle::Url);
        assert_eq!("Complete".parse::<AnsiStyle>().unwrap(), AnsiStyle::Complete);
        assert!(matches!(
            "blink".parse::<AnsiStyle>(),
            Err(LoggerError::UnknownStyle(_))
        ));
    }
}
