use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The scheduling platforms a search can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Calcom,
    Calendly,
}

impl Platform {
    /// The selector literal used in tool parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Calcom => "calcom",
            Platform::Calendly => "calendly",
        }
    }

    /// Human-readable provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Calcom => "Cal.com",
            Platform::Calendly => "Calendly",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = String;

    /// Only the exact lowercase literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calcom" => Ok(Platform::Calcom),
            "calendly" => Ok(Platform::Calendly),
            other => Err(format!("Unsupported platform: {}", other)),
        }
    }
}
