pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod infra;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use app::SyncUseCase;
pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use types::{SyncReport, WeaponRecord};
