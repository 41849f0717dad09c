use crate::error::ValidationError;

pub const LOGOUT_PROMPT: &str = "Вы уверены, что хотите выйти?";

/// Checks a bet form before it is allowed to submit. Rules run in order and the
/// first failure wins: a horse must be picked, the stake must reach
/// `min_stake`, and it must fit into the displayed balance.
///
/// `balance` is `None` when the page shows no balance, in which case only the
/// selection and minimum are checked.
pub fn validate_bet(
    horse_selected: bool,
    amount: f64,
    balance: Option<f64>,
    min_stake: f64,
) -> Result<(), ValidationError> {
    if !horse_selected {
        return Err(ValidationError::NoHorseSelected);
    }
    if amount.is_nan() || amount < min_stake {
        return Err(ValidationError::BelowMinimumStake { min: min_stake });
    }
    match balance {
        Some(balance) if amount > balance => Err(ValidationError::InsufficientBalance),
        _ => Ok(()),
    }
}

/// Deposit and withdraw forms only enforce the input's own `min` attribute.
pub fn validate_transaction(amount: f64, min: Option<f64>) -> Result<(), ValidationError> {
    let min = min.filter(|m| m.is_finite()).unwrap_or(0.0);
    if amount.is_nan() || amount < min {
        return Err(ValidationError::BelowMinimumAmount { min });
    }
    Ok(())
}

/// Outcome of clamping the stake input when it loses focus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StakeClamp {
    Unchanged,
    RaisedTo(f64),
    LoweredTo(f64),
}

impl StakeClamp {
    pub fn message(self) -> Option<String> {
        match self {
            Self::Unchanged => None,
            Self::RaisedTo(min) => Some(format!("Минимальная ставка: {} ₽", min)),
            Self::LoweredTo(max) => Some(format!("Максимальная ставка: {} ₽", max)),
        }
    }
}

pub fn clamp_stake(amount: f64, min: f64, max: Option<f64>) -> StakeClamp {
    if amount < min {
        StakeClamp::RaisedTo(min)
    } else if let Some(max) = max.filter(|m| amount > *m) {
        StakeClamp::LoweredTo(max)
    } else {
        StakeClamp::Unchanged
    }
}

/// Trimmed recovery email; only emptiness is checked here, the server does
/// the rest.
pub fn recovery_email(raw: &str) -> Result<&str, ValidationError> {
    match raw.trim() {
        "" => Err(ValidationError::EmptyEmail),
        email => Ok(email),
    }
}

pub fn recovery_sent_message(email: &str) -> String {
    format!("Инструкции по восстановлению пароля отправлены на email: {}", email)
}

pub fn withdraw_prompt(amount: f64) -> String {
    format!("Подтвердите вывод {} ₽", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_horse_blocks_any_amount() {
        for amount in [0.0, 10.0, 500.0, 1e9] {
            assert_eq!(
                validate_bet(false, amount, Some(1_000.0), 10.0),
                Err(ValidationError::NoHorseSelected)
            );
        }
    }

    #[test]
    fn stake_window_is_min_to_balance() {
        let balance = Some(100.0);
        assert_eq!(
            validate_bet(true, 9.99, balance, 10.0),
            Err(ValidationError::BelowMinimumStake { min: 10.0 })
        );
        assert_eq!(validate_bet(true, 10.0, balance, 10.0), Ok(()));
        assert_eq!(validate_bet(true, 55.5, balance, 10.0), Ok(()));
        assert_eq!(validate_bet(true, 100.0, balance, 10.0), Ok(()));
        assert_eq!(
            validate_bet(true, 100.01, balance, 10.0),
            Err(ValidationError::InsufficientBalance)
        );
    }

    #[test]
    fn exponent_stake_is_checked_against_balance() {
        let stake = crate::payout::parse_amount("10e5");
        assert_eq!(stake, 1_000_000.0);
        assert_eq!(
            validate_bet(true, stake, Some(1_000.0), 10.0),
            Err(ValidationError::InsufficientBalance)
        );
    }

    #[test]
    fn unknown_balance_skips_funds_check() {
        assert_eq!(validate_bet(true, 1e6, None, 10.0), Ok(()));
        assert!(validate_bet(true, 5.0, None, 10.0).is_err());
    }

    #[test]
    fn transaction_minimum_defaults_to_zero() {
        assert_eq!(validate_transaction(0.0, None), Ok(()));
        assert_eq!(validate_transaction(99.0, Some(100.0)),
            Err(ValidationError::BelowMinimumAmount { min: 100.0 }));
        assert_eq!(validate_transaction(100.0, Some(100.0)), Ok(()));
        assert!(validate_transaction(-1.0, None).is_err());
    }

    #[test]
    fn recovery_email_must_not_be_blank() {
        assert_eq!(recovery_email("   "), Err(ValidationError::EmptyEmail));
        assert_eq!(recovery_email(" rider@example.com "), Ok("rider@example.com"));
        assert!(recovery_sent_message("a@b.c").ends_with("email: a@b.c"));
    }

    #[test]
    fn clamp_reports_violated_bound() {
        assert_eq!(clamp_stake(5.0, 10.0, Some(200.0)), StakeClamp::RaisedTo(10.0));
        assert_eq!(clamp_stake(500.0, 10.0, Some(200.0)), StakeClamp::LoweredTo(200.0));
        assert_eq!(clamp_stake(50.0, 10.0, Some(200.0)), StakeClamp::Unchanged);
        assert_eq!(clamp_stake(5_000.0, 10.0, None), StakeClamp::Unchanged);
        assert_eq!(
            StakeClamp::LoweredTo(200.0).message().as_deref(),
            Some("Максимальная ставка: 200 ₽")
        );
    }
}
