pub mod catalog;
pub mod day_sheet;
