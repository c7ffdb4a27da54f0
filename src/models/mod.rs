// Re-export all model types
pub use self::errors::*;
pub use self::feedback::*;
pub use self::menu::*;
pub use self::order::*;
pub use self::validation::*;

mod errors;
mod feedback;
mod menu;
mod order;
mod validation;
