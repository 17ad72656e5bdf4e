pub mod body_map;
pub mod diagnosis;
pub mod first_aid;
pub mod home;
pub mod layout;
pub mod media_gallery;
pub mod results;
