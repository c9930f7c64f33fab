pub mod add;
pub mod app;
pub mod calculator;
pub mod config;
pub mod del;
pub mod form;
pub mod import;
pub mod log;
pub mod state;

pub use app::App;
pub use state::AppState;
