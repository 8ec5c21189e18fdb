pub mod sizes;
pub mod validate;
pub mod version;
