mod object_listing;

pub use object_listing::ObjectListing;
