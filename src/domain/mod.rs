pub mod analog;
pub mod clock;
pub mod layout;
pub mod models;
pub mod progress;
pub mod time_format;
