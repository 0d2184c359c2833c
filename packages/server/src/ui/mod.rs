//! UI 層: HTTP / WebSocket のエンドポイント

mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::build_router;
pub use runner::run;
