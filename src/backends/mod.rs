//! Backend implementations of the `Log` capability set
//!
//! Two backends, named for their sink-composition strategy:
//! - [`UnifiedLogger`]: one shared minimum level and one formatter; both
//!   sinks receive the same multiplexed bytes.
//! - [`TeeLogger`]: independent sinks, each with its own level filter and
//!   formatter; every record fans out to each.

pub mod tee;
pub mod unified;

pub use tee::TeeLogger;
pub use unified::UnifiedLogger;

use crate::config::FileConfig;
use crate::core::error::{LoggerError, Result};
use crate::sinks::{RotatingFileWriter, RotationPolicy};

/// Build the rotating writer for an enabled file sink, validating the path.
pub(crate) fn rotating_writer(
    config: &FileConfig,
    component: &str,
) -> Result<RotatingFileWriter> {
    if config.path.as_os_str().is_empty() {
        return Err(LoggerError::config(
            component,
            "file sink enabled without a path",
        ));
    }
    RotatingFileWriter::new(&config.path, RotationPolicy::from_config(config))
}
