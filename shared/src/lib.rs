pub mod constants;
pub mod contact;
pub mod persistence;
pub mod prize_wheel;
pub mod spin_session;
pub mod validation;
pub mod wheel_layout;
pub mod widget_config;
