//! UI components: the starfield canvas and the clipboard copy button.

pub mod copy_button;
pub mod galaxy;
