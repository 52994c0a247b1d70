pub mod context;
pub mod seed;
pub mod storage;

pub use context::{use_app, AppContext, AppView};
