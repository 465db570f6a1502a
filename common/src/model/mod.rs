pub mod application;
pub mod course;
pub mod question;
pub mod section;
pub mod template;
