//! Open/closed bookkeeping shared by the bet and password recovery dialogs.

use std::rc::Rc;

use yew::Reducible;

use crate::error::ValidationError;
use crate::model::{BetDraft, Selection};
use crate::payout;

/// What asked the dialog to close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Escape,
    /// A click somewhere inside the overlay. Only counts when the click target
    /// is the backdrop container itself, not the dialog content.
    Click { on_backdrop: bool },
}

impl CloseTrigger {
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(Self::Escape)
    }

    fn closes(self) -> bool {
        match self {
            Self::Button | Self::Escape => true,
            Self::Click { on_backdrop } => on_backdrop,
        }
    }
}

/// Two-state dialog carrying a payload while open. Opening an open dialog
/// replaces its payload; there is no stacking.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Open(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self { Self::Closed }
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool { matches!(self, Self::Open(_)) }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Open(p) => Some(p),
            Self::Closed => None,
        }
    }

    /// Whether `trigger` closes the dialog in its current state.
    pub fn closes_on(&self, trigger: CloseTrigger) -> bool {
        self.is_open() && trigger.closes()
    }
}

pub enum ModalAction<T> {
    Open(T),
    Trigger(CloseTrigger),
}

/// Several triggers can fire from one DOM event (the close button's click
/// also reaches the backdrop), so dialogs keep their state in a reducer where
/// each action sees the result of the previous one.
impl<T: Clone> Reducible for ModalState<T> {
    type Action = ModalAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ModalAction::Open(payload) => Rc::new(Self::Open(payload)),
            ModalAction::Trigger(trigger) if self.closes_on(trigger) => Rc::new(Self::Closed),
            ModalAction::Trigger(_) => self,
        }
    }
}

/// Contents of an open bet dialog: hidden fields plus the horse summary.
#[derive(Clone, Debug, PartialEq)]
pub struct BetSlip {
    pub draft: BetDraft,
    pub selection: Selection,
}

impl BetSlip {
    pub fn payout(&self) -> f64 {
        payout::potential_payout(payout::parse_amount(&self.draft.amount), self.selection.odds)
    }
}

/// Opens the bet dialog for `race_id`. Refused when no horse card is
/// selected on that race.
pub fn open_bet(
    race_id: u64,
    selection: Option<&Selection>,
    amount: &str,
) -> Result<ModalState<BetSlip>, ValidationError> {
    let selection = selection.ok_or(ValidationError::NothingToOpen)?;
    Ok(ModalState::Open(BetSlip {
        draft: BetDraft {
            race_id,
            horse_id: Some(selection.horse_id),
            amount: amount.to_string(),
        },
        selection: selection.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horse() -> Selection {
        Selection { horse_id: 2, horse_name: "Стрела".into(), odds: 3.0 }
    }

    #[test]
    fn open_then_backdrop_click_closes() {
        let state = open_bet(5, Some(&horse()), "100").unwrap();
        assert!(state.is_open());
        let slip = state.payload().unwrap();
        assert_eq!(slip.draft.race_id, 5);
        assert_eq!(slip.draft.horse_id, Some(2));
        assert_eq!(slip.payout(), 300.0);

        assert!(state.closes_on(CloseTrigger::Click { on_backdrop: true }));
        let state = Rc::new(state).reduce(ModalAction::Trigger(CloseTrigger::Click { on_backdrop: true }));
        assert_eq!(*state, ModalState::Closed);
    }

    #[test]
    fn clicks_inside_dialog_keep_it_open() {
        let state = open_bet(5, Some(&horse()), "").unwrap();
        assert!(!state.closes_on(CloseTrigger::Click { on_backdrop: false }));
        assert_eq!(state.payload().unwrap().payout(), 0.0);
    }

    #[test]
    fn escape_and_button_close() {
        for trigger in [CloseTrigger::Button, CloseTrigger::Escape] {
            let state = open_bet(1, Some(&horse()), "10").unwrap();
            assert!(state.closes_on(trigger));
        }
        assert_eq!(CloseTrigger::from_key("Escape"), Some(CloseTrigger::Escape));
        assert_eq!(CloseTrigger::from_key("Enter"), None);
    }

    #[test]
    fn cannot_open_without_selection() {
        assert_eq!(open_bet(5, None, "100"), Err(ValidationError::NothingToOpen));
    }

    #[test]
    fn reducer_applies_button_then_bubbled_click_in_order() {
        let slip = open_bet(5, Some(&horse()), "").unwrap().payload().cloned().unwrap();
        let state = Rc::new(ModalState::Closed).reduce(ModalAction::Open(slip));
        assert!(state.is_open());
        let state = state.reduce(ModalAction::Trigger(CloseTrigger::Button));
        let state = state.reduce(ModalAction::Trigger(CloseTrigger::Click { on_backdrop: false }));
        assert_eq!(*state, ModalState::Closed);
    }

    #[test]
    fn inside_click_keeps_same_state_instance() {
        let state = Rc::new(open_bet(5, Some(&horse()), "").unwrap());
        let next = state.clone().reduce(ModalAction::Trigger(CloseTrigger::Click { on_backdrop: false }));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn closed_dialog_ignores_triggers() {
        let state: ModalState<()> = ModalState::Closed;
        assert!(!state.closes_on(CloseTrigger::Escape));
    }
}
