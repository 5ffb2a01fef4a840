//! Runtime configuration parsed from the command line.

use anyhow::{Context as _, Error, bail};
use std::env;

/// Array length used when none is given on the command line.
const DEFAULT_LENGTH: usize = 100;

/// Configuration for one invocation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Config {
    /// Number of elements to generate and sum.
    pub length: usize,
    /// Number of pool workers, one partition each.
    pub workers: usize,
}

impl Config {
    /// Parse positional `[length] [workers]` arguments.
    ///
    /// Defaults: 100 elements, one worker per CPU core. Configuration
    /// errors are reported here, before anything is generated or
    /// dispatched.
    pub fn from_args() -> Result<Self, Error> {
        let mut args = env::args().skip(1);
        Self::parse(args.next(), args.next())
    }

    fn parse(length: Option<String>, workers: Option<String>) -> Result<Self, Error> {
        let length = match length {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid array length {raw:?}"))?,
            None => DEFAULT_LENGTH,
        };
        let workers = match workers {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid worker count {raw:?}"))?,
            None => num_cpus::get(),
        };
        if workers == 0 {
            bail!("worker count must be at least 1");
        }
        Ok(Self { length, workers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_arguments_are_absent() {
        let config = Config::parse(None, None).unwrap();
        assert_eq!(config.length, DEFAULT_LENGTH);
        assert!(config.workers >= 1);
    }

    #[test]
    fn positional_arguments_override_defaults() {
        let config = Config::parse(Some("250".into()), Some("4".into())).unwrap();
        assert_eq!(config, Config { length: 250, workers: 4 });
    }

    #[test]
    fn garbage_length_is_rejected() {
        assert!(Config::parse(Some("many".into()), None).is_err());
    }

    #[test]
    fn zero_workers_is_rejected() {
        assert!(Config::parse(None, Some("0".into())).is_err());
    }
}
