pub mod alert;
pub mod event;
pub mod message;
pub mod metadata;
