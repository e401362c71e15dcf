use std::{path::PathBuf, time::Duration};

pub struct Config {
    pub input:       PathBuf,
    /// Asked for interactively when missing
    pub algorithm:   Option<String>,
    pub timeout:     Duration,
    pub dimacs:      bool,
    /// Worker thread stack in bytes
    pub stack_size:  usize,
    pub return_code: bool,
}
