pub mod meeting;
pub mod qa;
pub mod transcript;
