pub mod chat;
pub mod dispatch;
pub mod generate;

pub use dispatch::dispatch;
