//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Child repositories scope every lookup, update and delete by `trip_id`
//! as well as `id`, so a record is never reachable through another trip.

pub mod food_repo;
pub mod gear_repo;
pub mod night_repo;
pub mod path_repo;
pub mod point_repo;
pub mod trip_repo;

pub use food_repo::FoodRepo;
pub use gear_repo::GearRepo;
pub use night_repo::NightRepo;
pub use path_repo::PathRepo;
pub use point_repo::PointRepo;
pub use trip_repo::TripRepo;
