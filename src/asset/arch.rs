/// CPU architecture an asset was built for, as inferred from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    Arm64,
    X64,
    Unknown,
}

impl Arch {
    /// Case-sensitive token match. ARM markers win over x86 markers when a
    /// name carries both.
    pub fn from_filename(name: &str) -> Self {
        if name.contains("aarch64") || name.contains("arm64") {
            return Arch::Arm64;
        }
        if name.contains("x86_64") || name.contains("x64") || name.contains("intel") {
            return Arch::X64;
        }
        Arch::Unknown
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::X64 => "x64",
            Arch::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
