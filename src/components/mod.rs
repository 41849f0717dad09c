pub mod auth;
pub mod balance;
pub mod bet_form;
pub mod bet_modal;
pub mod effects;
pub mod history;
pub mod messages;
pub mod modal;
pub mod race_timer;
pub mod races;
pub mod recovery;
pub mod transaction;
