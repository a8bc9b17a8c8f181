mod reminder;

pub use reminder::{Collection, Reminder, ShapeError};
