pub mod notification;
pub mod queue;
