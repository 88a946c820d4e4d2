pub mod add_modal;
pub mod details_modal;
pub mod edit_modal;
