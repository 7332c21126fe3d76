//! Console output gated by verbosity.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only errors, on stderr.
    Quiet,
    /// The report sections.
    Normal,
    /// Report plus training diagnostics.
    Verbose,
}

impl LogLevel {
    pub fn permits(self, required: LogLevel) -> bool {
        match (self, required) {
            (LogLevel::Quiet, _) => false,
            (_, LogLevel::Normal) => true,
            (level, required) => level == required,
        }
    }
}

pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.permits(required) {
        println!("{}", msg);
    }
}
