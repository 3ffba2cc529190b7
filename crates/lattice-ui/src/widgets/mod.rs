pub mod label;
pub mod panel;
pub mod window;
