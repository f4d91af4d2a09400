use tracing_subscriber::{prelude::*, EnvFilter, Registry};

use crate::Result;

/// Initialize tracing for the operator consuming these labels
pub fn init() -> Result<()> {
    let logger = tracing_subscriber::fmt::layer().compact();
    let env_filter = EnvFilter::try_from_default_env().or(EnvFilter::try_new("info"))?;

    let collector = Registry::default().with(logger).with(env_filter);

    // Initialize tracing
    tracing::subscriber::set_global_default(collector)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::Error;

    #[test]
    fn init_only_once() {
        assert!(super::init().is_ok());
        assert!(matches!(super::init(), Err(Error::TracingError(_))));
    }
}
