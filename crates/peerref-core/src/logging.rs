use crate::Result;

/// Initialize logging/tracing for a process embedding the codec.
///
/// Without the `subscriber` feature this is a no-op and events go to whatever
/// subscriber the host installs.
pub fn init(service_name: &str) -> Result<()> {
    let _ = service_name;

    #[cfg(feature = "subscriber")]
    {
        use tracing_subscriber::{fmt, EnvFilter};

        // Default: info for the codec and the service, warn for everything else.
        // Can be overridden with `RUST_LOG`.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("warn,peerref_core=info,{service_name}=info"))
        });

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| crate::errors::Error::External(format!("logging init failed: {e}")))?;
    }

    Ok(())
}
