pub mod ai;
pub mod chat;
pub mod dashboard;
pub mod notify;
