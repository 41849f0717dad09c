use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Horse {
    pub id: u64,
    pub name: String,
    pub odds: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RaceStatus {
    #[default]
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
}

impl RaceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Запланирован",
            Self::InProgress => "В процессе",
            Self::Finished => "Завершен",
            Self::Cancelled => "Отменен",
        }
    }

    pub fn accepts_bets(self) -> bool {
        matches!(self, Self::Scheduled)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Race {
    pub id: u64,
    pub title: String,
    /// RFC 3339 start time, rendered into `data-start-time`.
    pub start_time: String,
    #[serde(default)]
    pub status: RaceStatus,
    #[serde(default)]
    pub distance: Option<u32>,
    #[serde(default)]
    pub horses: Vec<Horse>,
}

impl Race {
    pub fn horse(&self, horse_id: u64) -> Option<&Horse> {
        self.horses.iter().find(|h| h.id == horse_id)
    }
}

/// The horse a user currently has picked.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub horse_id: u64,
    pub horse_name: String,
    pub odds: f64,
}

impl From<&Horse> for Selection {
    fn from(horse: &Horse) -> Self {
        Self {
            horse_id: horse.id,
            horse_name: horse.name.clone(),
            odds: horse.odds,
        }
    }
}

/// Hidden-field values carried by the bet modal up to submission.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BetDraft {
    pub race_id: u64,
    pub horse_id: Option<u64>,
    pub amount: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BetRecord {
    pub id: u64,
    pub race_title: String,
    pub horse_name: String,
    pub amount: f64,
    pub odds: f64,
    pub potential_win: f64,
    pub status: String,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Deposit => "Пополнение баланса",
            Self::Withdraw => "Вывод средств",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn race_payload_defaults_missing_fields() {
        let race: Race = serde_json::from_str(
            r#"{"id": 3, "title": "Кубок", "start_time": "2025-06-01T15:00:00+03:00"}"#,
        )
        .unwrap();
        assert_eq!(race.status, RaceStatus::Scheduled);
        assert!(race.horses.is_empty());
        assert!(race.status.accepts_bets());
    }

    #[test]
    fn selection_copies_horse_fields() {
        let horse = Horse { id: 7, name: "Молния".into(), odds: 2.5 };
        let sel = Selection::from(&horse);
        assert_eq!(sel.horse_id, 7);
        assert_eq!(sel.horse_name, "Молния");
        assert_eq!(sel.odds, 2.5);
    }
}
