//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO with a `validated` step that trims and
//!   checks the fields
//!
//! Wire format is camelCase throughout.

pub mod food;
pub mod gear;
pub mod night;
pub mod path;
pub mod point;
pub mod trip;
