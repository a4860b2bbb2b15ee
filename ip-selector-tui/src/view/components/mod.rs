pub mod banner;
pub mod statusbar;
