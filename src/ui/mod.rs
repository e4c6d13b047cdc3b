pub mod alerts_panel;
pub mod history_panel;
pub mod nav_bar;
pub mod search_panel;
pub mod status_bar;
