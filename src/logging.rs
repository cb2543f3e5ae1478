use tracing_subscriber::EnvFilter;

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,changelog_gen=debug";

/// Controls how much the program reports while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        }
    }

    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }

    fn default_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => QUIET_FILTER,
            Verbosity::Verbose => VERBOSE_FILTER,
        }
    }

    /// Installs the stderr subscriber. `RUST_LOG` takes precedence over the flag.
    pub fn init_tracing(self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_filter()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    }
}
