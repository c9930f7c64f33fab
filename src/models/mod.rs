pub mod week_entry;

pub use week_entry::WeekEntry;
