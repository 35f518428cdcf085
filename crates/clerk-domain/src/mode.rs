//! Writing mode - register and length of the generated prose

/// Audience the brief is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WritingMode {
    /// Accessible, explanatory prose for law students
    #[default]
    Student,

    /// Formal, precise prose for practitioners
    Professional,
}

impl WritingMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            WritingMode::Student => "student",
            WritingMode::Professional => "professional",
        }
    }

    /// Parse a mode from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(WritingMode::Student),
            "professional" => Some(WritingMode::Professional),
            _ => None,
        }
    }
}

impl std::fmt::Display for WritingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
