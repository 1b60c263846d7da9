pub mod forward;
pub mod version;
