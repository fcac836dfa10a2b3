pub mod attachment;
pub mod post;
pub mod utils;
