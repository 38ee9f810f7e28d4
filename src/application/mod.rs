pub mod bootstrap;
pub mod console;
pub mod dashboard;
pub mod state;
pub mod sunrise_task;
pub mod ticker;
