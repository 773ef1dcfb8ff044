mod bucket_name;
mod object_name;
mod sdk_version;

pub use bucket_name::BucketName;
pub use object_name::ObjectName;
pub use sdk_version::SdkVersion;
