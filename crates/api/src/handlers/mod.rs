pub mod auth;
pub mod sat;
pub mod song_points;
pub mod songs;
pub mod tracks;
pub mod users;
