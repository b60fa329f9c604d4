pub mod time;
pub mod timers;
pub mod viewport;
