pub mod border;
pub mod icon;
pub mod link;
pub mod text;
