pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod uri;

/// Name used for XDG directories, the log file and the default log filter.
pub const APP_NAME: &str = "typeuri";

pub use error::{DecodeFailure, InvalidArgument, InvalidArgumentKind};
pub use report::UriReport;
pub use uri::{QueryMap, TypeUri};

/// Re-exported so callers can build a [`TypeUri`] from a pre-parsed value
/// without adding their own `url` dependency.
pub use url::Url;
