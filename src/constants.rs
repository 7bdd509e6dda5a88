//! Centralized constants for the erfcx crate

/// Numeric working precision
pub mod precision {
    /// Working precision in bits, carried through every intermediate value
    /// (about 33 significant decimal digits)
    pub const WORKING_PRECISION_BITS: u32 = 110;
}

/// Output settings
pub mod output {
    /// Default output format
    pub const DEFAULT_FORMAT: &str = "text";
}
