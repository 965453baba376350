pub mod app;
pub mod components;
pub mod markup;
pub mod state;
pub mod transcript;

pub use app::ChatApp;
pub use state::AppState;
