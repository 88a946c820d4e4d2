pub mod confirm_dialog;
pub mod empty_state;
pub mod layout;
pub mod modal;
pub mod status_badge;
pub mod theme;
