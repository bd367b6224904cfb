pub mod buildcore;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod log;
pub mod pet;
pub mod prototype;
pub mod queue;
pub mod ticket;
