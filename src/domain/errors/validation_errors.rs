/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ObjectName validation errors
    EmptyObjectName,
    ObjectNameTooLong {
        actual: usize,
        max: usize,
    },
    InvalidObjectNameCharacter(char),
    ObjectNameIsRelativeReference(String),

    // BucketName validation errors
    BucketNameTooShort {
        actual: usize,
        min: usize,
    },
    BucketNameTooLong {
        actual: usize,
        max: usize,
    },
    BucketNameInvalidStart,
    BucketNameInvalidEnd,
    BucketNameInvalidCharacter(char),
    BucketNameConsecutiveDots,
    BucketNameLooksLikeIpAddress,

    // SdkVersion validation errors
    MalformedSdkVersion(String),

    // Release target validation errors
    UnsupportedOs(String),
    EmptyArchitecture,

    // ListingQuery validation errors
    InvalidMatchGlob {
        glob: String,
        reason: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ObjectName errors
            ValidationError::EmptyObjectName => write!(f, "Object name cannot be empty"),
            ValidationError::ObjectNameTooLong { actual, max } => {
                write!(f, "Object name too long: {} bytes (max: {})", actual, max)
            }
            ValidationError::InvalidObjectNameCharacter(c) => {
                write!(f, "Invalid character in object name: {:?}", c)
            }
            ValidationError::ObjectNameIsRelativeReference(name) => {
                write!(f, "Object name cannot be '{}'", name)
            }

            // BucketName errors
            ValidationError::BucketNameTooShort { actual, min } => {
                write!(
                    f,
                    "Bucket name too short: {} characters (min: {})",
                    actual, min
                )
            }
            ValidationError::BucketNameTooLong { actual, max } => {
                write!(
                    f,
                    "Bucket name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::BucketNameInvalidStart => {
                write!(f, "Bucket name must start with lowercase letter or number")
            }
            ValidationError::BucketNameInvalidEnd => {
                write!(f, "Bucket name must end with lowercase letter or number")
            }
            ValidationError::BucketNameInvalidCharacter(c) => {
                write!(
                    f,
                    "Invalid character in bucket name: '{}'. Only lowercase letters, numbers, '-', '_' and '.' allowed",
                    c
                )
            }
            ValidationError::BucketNameConsecutiveDots => {
                write!(f, "Bucket name cannot contain consecutive dots")
            }
            ValidationError::BucketNameLooksLikeIpAddress => {
                write!(f, "Bucket name cannot be formatted as an IP address")
            }

            // SdkVersion errors
            ValidationError::MalformedSdkVersion(value) => {
                write!(
                    f,
                    "Malformed SDK version '{}' (expected <major>.<minor>.<patch>)",
                    value
                )
            }

            // Release target errors
            ValidationError::UnsupportedOs(os) => write!(f, "Unexpected OS '{}'", os),
            ValidationError::EmptyArchitecture => write!(f, "Architecture cannot be empty"),

            // ListingQuery errors
            ValidationError::InvalidMatchGlob { glob, reason } => {
                write!(f, "Invalid match glob '{}': {}", glob, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
