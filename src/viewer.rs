pub mod basemap;
pub mod camera;
pub mod controller;
pub mod graphic;
pub mod markers;
