pub mod credentials;
pub mod notification;
