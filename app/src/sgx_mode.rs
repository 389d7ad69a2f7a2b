//! `SGX_MODE` handling, shared with `build.rs`.

/// Flavour of the untrusted runtime libraries to link against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgxMode {
    Hw,
    Sim,
}

impl SgxMode {
    /// Used when `SGX_MODE` is unset or unrecognised; CI hosts rarely have SGX hardware.
    pub const DEFAULT: SgxMode = SgxMode::Sim;

    /// Parses an `SGX_MODE` value. `SW` is accepted as an alias of `SIM`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "HW" => Some(SgxMode::Hw),
            "SIM" | "SW" => Some(SgxMode::Sim),
            _ => None,
        }
    }

    pub fn library_suffix(self) -> &'static str {
        match self {
            SgxMode::Hw => "",
            SgxMode::Sim => "_sim",
        }
    }

    /// Dynamic libraries the host binary needs in this mode.
    pub fn link_libraries(self) -> [String; 2] {
        let suffix = self.library_suffix();
        [
            format!("sgx_urts{}", suffix),
            format!("sgx_launch{}", suffix),
        ]
    }
}
