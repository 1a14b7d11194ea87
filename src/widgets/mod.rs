pub mod frame;
pub mod illustration;
pub mod widget;

/// Macro to implement the dirty flag methods for simple widgets.
macro_rules! impl_dirty_flags {
    () => {
        fn mark_dirty(&mut self, flags: crate::widgets::ChangeFlags) {
            self.dirty_flags |= flags;
        }
        fn needs_layout(&self) -> bool {
            self.dirty_flags
                .contains(crate::widgets::ChangeFlags::NEEDS_LAYOUT)
        }
        fn needs_paint(&self) -> bool {
            self.dirty_flags
                .contains(crate::widgets::ChangeFlags::NEEDS_PAINT)
        }
        fn clear_dirty(&mut self) {
            self.dirty_flags = crate::widgets::ChangeFlags::empty();
        }
    };
}
pub(crate) use impl_dirty_flags;

pub use frame::{frame, Frame};
pub use illustration::{illustration, Illustration};
pub use widget::{ChangeFlags, Color, Padding, Rect, Widget};
