//! Application-lifecycle event helpers shared by the CLI.

use tracing::{error, info, warn};

use crate::errors::SweepError;

pub fn log_app_startup() {
    info!(
        event = "app.startup",
        version = env!("CARGO_PKG_VERSION"),
    );
}

/// Log an application error at the level its classification calls for.
///
/// User errors (bad flags, missing kubeconfig) are warnings; everything
/// else is an error.
pub fn log_app_error<E: SweepError>(error: &E) {
    if error.is_user_error() {
        warn!(
            event = "app.user_error",
            code = error.error_code(),
            error = %error,
        );
    } else {
        error!(
            event = "app.error",
            code = error.error_code(),
            error = %error,
        );
    }
}
