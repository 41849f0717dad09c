//! Password strength and confirmation feedback for the registration form.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Criteria {
    pub length: bool,
    pub upper: bool,
    pub lower: bool,
    pub number: bool,
}

impl Criteria {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: password.chars().count() >= 8,
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    pub fn count(&self) -> u8 {
        [self.length, self.upper, self.lower, self.number]
            .iter()
            .filter(|met| **met)
            .count() as u8
    }

    /// Checklist rows in display order: element id, label, met.
    pub fn checklist(&self) -> [(&'static str, &'static str, bool); 4] {
        [
            ("reqLength", "Минимум 8 символов", self.length),
            ("reqUpper", "Заглавная буква", self.upper),
            ("reqLower", "Строчная буква", self.lower),
            ("reqNumber", "Цифра", self.number),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 | 1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn of(password: &str) -> Self {
        Self::from_count(Criteria::evaluate(password).count())
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Weak => "strength-weak",
            Self::Fair => "strength-fair",
            Self::Good => "strength-good",
            Self::Strong => "strength-strong",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Слабый пароль",
            Self::Fair => "Средний пароль",
            Self::Good => "Хороший пароль",
            Self::Strong => "Сильный пароль",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Weak => "#e74c3c",
            Self::Fair => "#f39c12",
            Self::Good => "#3498db",
            Self::Strong => "#27ae60",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordMatch {
    /// Confirmation still empty, nothing is shown.
    Pending,
    Match,
    Mismatch,
}

impl PasswordMatch {
    pub fn check(password: &str, confirmation: &str) -> Self {
        if confirmation.is_empty() {
            Self::Pending
        } else if password == confirmation {
            Self::Match
        } else {
            Self::Mismatch
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Self::Pending => "",
            Self::Match => "✓ Пароли совпадают",
            Self::Mismatch => "✗ Пароли не совпадают",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Pending => "",
            Self::Match => "#27ae60",
            Self::Mismatch => "#e74c3c",
        }
    }
}

/// Visibility toggle state for a single password input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Visibility {
    pub revealed: bool,
}

impl Visibility {
    pub fn toggled(self) -> Self { Self { revealed: !self.revealed } }

    pub fn input_type(self) -> &'static str {
        if self.revealed { "text" } else { "password" }
    }

    pub fn icon(self) -> &'static str {
        if self.revealed { "🔒" } else { "👁️" }
    }

    pub fn aria_label(self) -> &'static str {
        if self.revealed { "Скрыть пароль" } else { "Показать пароль" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_marks_is_strong() {
        let c = Criteria::evaluate("Abcdefgh1");
        assert_eq!(c, Criteria { length: true, upper: true, lower: true, number: true });
        assert_eq!(Strength::of("Abcdefgh1"), Strength::Strong);
        assert_eq!(Strength::Strong.css_class(), "strength-strong");
    }

    #[test]
    fn bands_follow_criteria_count() {
        assert_eq!(Strength::of(""), Strength::Weak);
        assert_eq!(Strength::of("a"), Strength::Weak);
        assert_eq!(Strength::of("aB"), Strength::Fair);
        assert_eq!(Strength::of("aB1"), Strength::Good);
        assert_eq!(Strength::of("abcdefgh"), Strength::Fair);
        assert_eq!(Strength::of("12345678"), Strength::Fair);
    }

    #[test]
    fn strength_is_monotonic_in_count() {
        let bands: Vec<Strength> = (0..=4).map(Strength::from_count).collect();
        assert!(bands.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(!Criteria::evaluate("пароль1").length);
        assert!(Criteria::evaluate("парольАБ").length);
    }

    #[test]
    fn checklist_reflects_each_criterion() {
        let rows = Criteria::evaluate("abc").checklist();
        let met: Vec<bool> = rows.iter().map(|r| r.2).collect();
        assert_eq!(met, vec![false, false, true, false]);
        assert_eq!(rows[0].0, "reqLength");
    }

    #[test]
    fn match_indicator_states() {
        assert_eq!(PasswordMatch::check("secret", ""), PasswordMatch::Pending);
        assert_eq!(PasswordMatch::check("", ""), PasswordMatch::Pending);
        assert_eq!(PasswordMatch::check("secret", "secret"), PasswordMatch::Match);
        assert_eq!(PasswordMatch::check("secret", "secreT"), PasswordMatch::Mismatch);
        assert_eq!(PasswordMatch::check("", "x"), PasswordMatch::Mismatch);
        assert_eq!(PasswordMatch::Pending.text(), "");
    }

    #[test]
    fn visibility_toggles_both_ways() {
        let v = Visibility::default();
        assert_eq!(v.input_type(), "password");
        let v = v.toggled();
        assert_eq!((v.input_type(), v.icon()), ("text", "🔒"));
        assert_eq!(v.toggled(), Visibility::default());
    }
}
