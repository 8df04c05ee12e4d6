pub mod list;
pub mod relay;
