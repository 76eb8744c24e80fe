//! Chain handlers: [`LoggingHandler`] around [`LaunchpadHandler`].

mod launchpad;
mod logging;

pub use launchpad::LaunchpadHandler;
pub use logging::LoggingHandler;
