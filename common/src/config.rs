/// Number of terms printed when `--length` is not given.
pub const DEFAULT_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How many terms of the sequence to emit.
    pub length: usize,
    /// Verbosity of the diagnostics written to stderr.
    ///
    /// Does not change what is written to stdout.
    pub verbose: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            verbose: 0,
            no_banner: false,
        }
    }
}

impl Config {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prints_five_terms_quietly() {
        let cfg = Config::default();
        assert_eq!(cfg.length, 5);
        assert_eq!(cfg.verbose, 0);
        assert!(!cfg.no_banner);
    }

    #[test]
    fn with_length_keeps_other_defaults() {
        let cfg = Config::with_length(12);
        assert_eq!(cfg.length, 12);
        assert_eq!(cfg, Config { length: 12, ..Config::default() });
    }
}
