//! Endpoint paths, thresholds and delays.
//!
//! Every knob has a compiled default. The host element may override any of
//! them through a `data-*` attribute of the same name (`data-bet-endpoint`,
//! `data-min-stake`, ...).

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub bet_endpoint: String,
    pub dashboard_url: String,
    pub history_url: String,
    /// `None` keeps the simulated recovery round trip.
    pub recovery_endpoint: Option<String>,
    pub logout_url: String,
    pub min_stake: f64,
    pub message_ttl_ms: u32,
    pub redirect_delay_ms: u32,
    pub busy_revert_ms: u32,
    pub recovery_delay_ms: u32,
    pub focus_delay_ms: u32,
    pub timer_refresh_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bet_endpoint: "/bet/".into(),
            dashboard_url: "/betting/dashboard/".into(),
            history_url: "/betting/history/".into(),
            recovery_endpoint: None,
            logout_url: "/logout/".into(),
            min_stake: 10.0,
            message_ttl_ms: 5_000,
            redirect_delay_ms: 1_500,
            busy_revert_ms: 5_000,
            recovery_delay_ms: 2_000,
            focus_delay_ms: 300,
            timer_refresh_ms: 60_000,
        }
    }
}

impl UiConfig {
    pub const ATTRIBUTES: &'static [&'static str] = &[
        "bet-endpoint",
        "dashboard-url",
        "history-url",
        "recovery-endpoint",
        "logout-url",
        "min-stake",
        "message-ttl-ms",
        "redirect-delay-ms",
        "busy-revert-ms",
        "recovery-delay-ms",
        "focus-delay-ms",
        "timer-refresh-ms",
    ];

    /// Builds a config from defaults plus whatever `lookup` returns for each
    /// known attribute name. Overrides that fail to parse are skipped and
    /// reported back so the caller can log them.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut cfg = Self::default();
        let mut rejected = Vec::new();
        for &name in Self::ATTRIBUTES {
            if let Some(value) = lookup(name) {
                if let Err(e) = cfg.apply(name, value.trim()) {
                    rejected.push(e);
                }
            }
        }
        (cfg, rejected)
    }

    pub fn apply(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        match name {
            "bet-endpoint" => self.bet_endpoint = path(value, "bet-endpoint")?,
            "dashboard-url" => self.dashboard_url = path(value, "dashboard-url")?,
            "history-url" => self.history_url = path(value, "history-url")?,
            "logout-url" => self.logout_url = path(value, "logout-url")?,
            "recovery-endpoint" => {
                self.recovery_endpoint = if value.is_empty() {
                    None
                } else {
                    Some(path(value, "recovery-endpoint")?)
                }
            }
            "min-stake" => {
                self.min_stake = value
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .ok_or_else(|| invalid("min-stake", value))?
            }
            "message-ttl-ms" => self.message_ttl_ms = millis(value, "message-ttl-ms")?,
            "redirect-delay-ms" => self.redirect_delay_ms = millis(value, "redirect-delay-ms")?,
            "busy-revert-ms" => self.busy_revert_ms = millis(value, "busy-revert-ms")?,
            "recovery-delay-ms" => self.recovery_delay_ms = millis(value, "recovery-delay-ms")?,
            "focus-delay-ms" => self.focus_delay_ms = millis(value, "focus-delay-ms")?,
            "timer-refresh-ms" => self.timer_refresh_ms = millis(value, "timer-refresh-ms")?,
            _ => {}
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue { field, value: value.to_string() }
}

fn millis(value: &str, field: &'static str) -> Result<u32, ConfigError> {
    value.parse::<u32>().map_err(|_| invalid(field, value))
}

fn path(value: &str, field: &'static str) -> Result<String, ConfigError> {
    if value.starts_with('/') || value.starts_with("https://") || value.starts_with("http://") {
        Ok(value.to_string())
    } else {
        Err(invalid(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_match_site_behaviour() {
        let cfg = UiConfig::default();
        assert_eq!(cfg.bet_endpoint, "/bet/");
        assert_eq!(cfg.dashboard_url, "/betting/dashboard/");
        assert_eq!(cfg.min_stake, 10.0);
        assert_eq!(cfg.redirect_delay_ms, 1_500);
        assert_eq!(cfg.busy_revert_ms, 5_000);
        assert!(cfg.recovery_endpoint.is_none());
    }

    #[test]
    fn attributes_override_defaults() {
        let map = attrs(&[
            ("bet-endpoint", "/api/bets/"),
            ("min-stake", "50"),
            ("recovery-endpoint", "/accounts/recover/"),
            ("message-ttl-ms", " 3000 "),
        ]);
        let (cfg, rejected) = UiConfig::from_attributes(|k| map.get(k).cloned());
        assert!(rejected.is_empty());
        assert_eq!(cfg.bet_endpoint, "/api/bets/");
        assert_eq!(cfg.min_stake, 50.0);
        assert_eq!(cfg.recovery_endpoint.as_deref(), Some("/accounts/recover/"));
        assert_eq!(cfg.message_ttl_ms, 3_000);
    }

    #[test]
    fn bad_overrides_are_reported_and_skipped() {
        let map = attrs(&[("min-stake", "-1"), ("busy-revert-ms", "soon"), ("bet-endpoint", "bet")]);
        let (cfg, rejected) = UiConfig::from_attributes(|k| map.get(k).cloned());
        assert_eq!(cfg, UiConfig::default());
        assert_eq!(rejected.len(), 3);
        assert!(rejected.contains(&ConfigError::InvalidValue {
            field: "busy-revert-ms",
            value: "soon".into()
        }));
    }
}
