//! Process-level error types.
//!
//! The status endpoint cannot fail; these cover binding and serving.

use std::io;

/// Errors raised while starting or running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listener could not be bound to the configured address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The server loop terminated with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn bind_error_display_includes_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:3000".to_string(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "address in use"),
        };
        assert_eq!(
            err.to_string(),
            "failed to bind 0.0.0.0:3000: address in use"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn serve_error_converts_from_io() {
        let err: ServerError = io::Error::other("boom").into();
        assert!(matches!(err, ServerError::Serve(_)));
        assert_eq!(err.to_string(), "server error: boom");
    }
}
