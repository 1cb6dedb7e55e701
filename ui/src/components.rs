pub mod app;
pub mod breadcrumb_trail;
pub mod info_panel;
pub mod modal_overlay;
pub mod online_indicator;
pub mod toggle_control;
