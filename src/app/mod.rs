pub mod app;
pub mod dashboard;
pub mod debounce;
pub mod dispatch;
pub mod event;
pub mod prediction;
pub mod refresh;
pub mod remote;
pub mod search;
pub mod store;
pub mod ui;
pub mod utils;
pub mod widgets;

pub use app::App;
pub use dashboard::Dashboard;
pub use store::SymbolStore;
