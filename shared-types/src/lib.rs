pub mod error;
pub mod resource;
pub mod schedule;

pub use error::ScheduleError;
pub use resource::{ApiErrorBody, Category, GeoPoint, Phone, ResourceList, ResourceRecord};
pub use schedule::{TimeWindow, Weekday, WeeklySchedule};
