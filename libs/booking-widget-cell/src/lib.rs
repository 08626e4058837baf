pub mod dialogs;
pub mod messages;
pub mod state;
pub mod widget;

pub use dialogs::Dialogs;
pub use state::*;
pub use widget::*;
