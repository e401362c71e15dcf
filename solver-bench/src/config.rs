use std::path::PathBuf;

pub struct Config {
    /// Formula file; random formulas are generated when absent
    pub input:          Option<PathBuf>,
    pub generate:       usize,
    pub seed:           u64,
    pub output:         PathBuf,
    pub max_duration:   u64,
}
