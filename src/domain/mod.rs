pub mod story;
pub mod ticket;
