/// A seat's choice at a decision point: press on, or bank the accumulator.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Decision {
    Roll,
    Hold,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Roll => write!(f, "{}", "ROLL".cyan()),
            Decision::Hold => write!(f, "{}", "HOLD".green()),
        }
    }
}

/// The interactive wire format: a single letter, case and whitespace
/// forgiven. Anything else re-prompts with the error line.
impl TryFrom<&str> for Decision {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" => Ok(Decision::Roll),
            "h" => Ok(Decision::Hold),
            _ => Err("enter 'r' to roll or 'h' to hold"),
        }
    }
}


use colored::*;
