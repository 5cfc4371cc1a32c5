pub mod header;
pub use header::pretty_header;

pub mod sanitize;
pub use sanitize::{Bounds, DesiredType, FilterError, Pattern, Sanitize, YesNo};

pub mod terminal;
pub use terminal::{PromptError, Terminal};
