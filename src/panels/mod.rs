mod central_panel;
mod dialogs;
mod toolbar;

pub use central_panel::central_panel;
pub use dialogs::dialogs;
pub use toolbar::toolbar;
