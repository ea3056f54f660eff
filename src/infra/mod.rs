pub mod http_client;
pub mod target_file;

pub use http_client::ReqwestDocumentSource;
pub use target_file::{FsTargetFile, StdoutTarget};
