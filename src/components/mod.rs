//! UI components for the studio shell and inference view.

pub mod gallery;
pub mod health_chip;
pub mod history_panel;
pub mod logo;
pub mod nav_bar;
pub mod parameter_panel;
pub mod prompt_panel;
pub mod splash;
