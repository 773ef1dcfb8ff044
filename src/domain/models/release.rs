use crate::domain::{errors::ValidationError, value_objects::SdkVersion};

/// Where release archives are published
pub const RELEASE_DOWNLOAD_BASE: &str = "https://dl.google.com/dl/cloudsdk/channels/rapid/downloads";

/// Operating systems the SDK ships archives for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
}

impl Platform {
    /// Parse an OS name as reported by the host (`linux`, `darwin`, `win32`)
    pub fn parse(os: &str) -> Result<Self, ValidationError> {
        match os {
            "linux" => Ok(Platform::Linux),
            "darwin" | "macos" => Ok(Platform::Darwin),
            "win32" | "windows" => Ok(Platform::Windows),
            other => Err(ValidationError::UnsupportedOs(other.to_string())),
        }
    }

    fn archive_os(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
            Platform::Windows => "windows",
        }
    }

    fn archive_extension(&self) -> &'static str {
        match self {
            Platform::Windows => "zip",
            Platform::Linux | Platform::Darwin => "tar.gz",
        }
    }
}

/// Map a host architecture name onto the SDK archive convention
pub fn sdk_architecture(arch: &str) -> &str {
    match arch {
        "x64" => "x86_64",
        "arm64" | "aarch64" => "arm",
        other => other,
    }
}

/// A concrete release archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTarget {
    pub platform: Platform,
    pub arch: String,
    pub version: SdkVersion,
}

impl ReleaseTarget {
    pub fn new(os: &str, arch: &str, version: SdkVersion) -> Result<Self, ValidationError> {
        let platform = Platform::parse(os)?;
        if arch.is_empty() {
            return Err(ValidationError::EmptyArchitecture);
        }

        Ok(Self {
            platform,
            arch: sdk_architecture(arch).to_string(),
            version,
        })
    }

    /// Object name of the archive inside the release bucket
    pub fn object_name(&self) -> String {
        format!(
            "google-cloud-sdk-{}-{}-{}.{}",
            self.version,
            self.platform.archive_os(),
            self.arch,
            self.platform.archive_extension()
        )
    }

    pub fn release_url(&self) -> String {
        format!("{}/{}", RELEASE_DOWNLOAD_BASE, self.object_name())
    }
}
