/// Errors from looking up the latest release on the release channel
#[derive(Debug, Clone)]
pub enum ChannelError {
    /// Manifest endpoint did not answer 200
    UnexpectedStatus { status: u16 },

    /// Manifest body could not be decoded or lacked a usable version
    InvalidManifest { message: String },

    /// The request never produced a response
    Transport { message: String },
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelError::UnexpectedStatus { status } => {
                write!(
                    f,
                    "Failed to retrieve gcloud SDK version, statusCode: {}",
                    status
                )
            }
            ChannelError::InvalidManifest { message } => {
                write!(
                    f,
                    "Failed to retrieve gcloud SDK version, invalid response body: {}",
                    message
                )
            }
            ChannelError::Transport { message } => {
                write!(f, "Release channel request failed: {}", message)
            }
        }
    }
}

impl std::error::Error for ChannelError {}

pub type ChannelResult<T> = Result<T, ChannelError>;
