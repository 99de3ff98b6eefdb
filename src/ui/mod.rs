// Wed Jan 15 2026 - Alex

pub mod banner;
pub mod console;
pub mod input;

pub use banner::Banner;
pub use console::Console;
pub use input::Prompter;
