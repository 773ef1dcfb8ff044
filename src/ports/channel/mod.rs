mod release_channel;

pub use release_channel::ReleaseChannel;
