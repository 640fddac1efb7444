pub mod menu;
pub mod status;
