const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@£$%^&*()€#-=_+[]{};'\\:\"|<>?,./~`§±";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    pub name: &'static str,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PasswordStrength {
    pub checks: Vec<PasswordCheck>,
    /// Fraction of checks passed, in sixths.
    pub strength: f64,
}

impl PasswordStrength {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|check| check.passed).count()
    }
}

fn contains_any(password: &str, allowed: &str) -> bool {
    password.chars().any(|c| allowed.contains(c))
}

/// Score a password against six independent checks.
pub fn password_strength(password: &str) -> PasswordStrength {
    let length = password.chars().count();
    let checks = vec![
        PasswordCheck {
            name: "Minimum recommended length 8 characters",
            passed: length >= 8,
        },
        PasswordCheck {
            name: "Recommended length 12+ characters",
            passed: length >= 12,
        },
        PasswordCheck {
            name: "One lower case character",
            passed: contains_any(password, LOWERCASE),
        },
        PasswordCheck {
            name: "One upper case character",
            passed: contains_any(password, UPPERCASE),
        },
        PasswordCheck {
            name: "One number",
            passed: contains_any(password, DIGITS),
        },
        PasswordCheck {
            name: "One symbol",
            passed: contains_any(password, SYMBOLS),
        },
    ];

    let passed = checks.iter().filter(|check| check.passed).count();
    let strength = passed as f64 / checks.len() as f64;
    PasswordStrength { checks, strength }
}
