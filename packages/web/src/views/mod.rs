mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod feed;
pub use feed::Feed;

mod location_details;
pub use location_details::LocationDetails;

mod add_location;
pub use add_location::AddLocation;

mod community;
pub use community::Community;

mod profile;
pub use profile::Profile;

mod admin;
pub use admin::Admin;
