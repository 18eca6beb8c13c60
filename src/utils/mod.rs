//! Shared helpers: HTTP probing, URL handling and the per-request warning log

pub mod http_client;
pub mod url;
pub mod warnings;

pub use http_client::{HttpProbe, ProbeOutcome, ReqwestProbe};
pub use url::UrlUtils;
pub use warnings::WarningLog;
