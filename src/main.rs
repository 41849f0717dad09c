mod api;
mod app;
mod busy;
mod components;
mod config;
mod effects;
mod error;
mod modal;
mod model;
mod password;
mod payout;
mod timer;
mod validation;

fn main() {
    if let Err(e) = app::mount() {
        gloo::console::error!(format!("[paddock] {}", e));
    }
}
