pub mod quality;
pub mod resume;
