pub mod auth;
pub mod notification;
pub mod staff;
pub mod vacation;
