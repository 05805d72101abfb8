pub mod alumni;
pub mod event;
