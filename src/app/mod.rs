pub mod ports;
pub mod sync_use_case;

pub use sync_use_case::SyncUseCase;
