//! Small form and button primitives shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Field, Input, Label, TextArea};
