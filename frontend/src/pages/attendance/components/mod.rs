pub mod mark_modal;
