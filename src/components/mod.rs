pub mod app;
pub mod calling_screen;
pub mod emergency_panel;
pub mod help_tooltip;
pub mod intro_overlay;
pub mod lock_screen;
pub mod pin_screen;
pub mod start_screen;
pub mod unlocked_screen;
