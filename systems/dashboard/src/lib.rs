pub mod driver;
pub mod terminal;
