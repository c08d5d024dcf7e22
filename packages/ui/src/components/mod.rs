//! Small form primitives shared by every page.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label, Textarea};

mod notice;
pub use notice::NoticeBanner;
