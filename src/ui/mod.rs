pub mod table;
pub mod theme;
