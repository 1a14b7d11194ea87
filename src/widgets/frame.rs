//! Generic stacked container: children overlap, each placed by its own
//! gravity inside the padded content area.

use crate::canvas::Canvas;
use crate::layout::{gravity, Constraints, Gravity, LayoutDirection, Size};

use super::impl_dirty_flags;
use super::widget::{ChangeFlags, Padding, Rect, Widget};

struct Child {
    widget: Box<dyn Widget>,
    gravity: Gravity,
    size: Size,
}

pub struct Frame {
    dirty_flags: ChangeFlags,
    children: Vec<Child>,
    padding: Padding,
    direction: LayoutDirection,
    bounds: Rect,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            children: Vec::new(),
            padding: Padding::default(),
            direction: LayoutDirection::default(),
            bounds: Rect::default(),
        }
    }

    pub fn child(self, widget: impl Widget + 'static) -> Self {
        self.child_with_gravity(widget, Gravity::default())
    }

    pub fn child_with_gravity(mut self, widget: impl Widget + 'static, gravity: Gravity) -> Self {
        self.push_child(widget, gravity);
        self
    }

    /// Append a child in place (the non-builder form).
    pub fn push_child(&mut self, widget: impl Widget + 'static, gravity: Gravity) {
        self.children.push(Child {
            widget: Box::new(widget),
            gravity,
            size: Size::zero(),
        });
        self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Replace the padding, marking the frame dirty when it actually changed.
    pub fn set_padding(&mut self, padding: Padding) {
        if padding == self.padding {
            return;
        }
        self.padding = padding;
        self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    pub fn set_direction(&mut self, direction: LayoutDirection) {
        if direction == self.direction {
            return;
        }
        self.direction = direction;
        self.dirty_flags |= ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT;
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Frame {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let inner = Constraints {
            min_width: 0.0,
            min_height: 0.0,
            max_width: (constraints.max_width - self.padding.horizontal()).max(0.0),
            max_height: (constraints.max_height - self.padding.vertical()).max(0.0),
        };

        let mut content = Size::zero();
        for child in &mut self.children {
            child.size = child.widget.layout(inner);
            content.width = content.width.max(child.size.width);
            content.height = content.height.max(child.size.height);
        }

        let size = constraints.constrain(Size::new(
            content.width + self.padding.horizontal(),
            content.height + self.padding.vertical(),
        ));
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        size
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
        let content = Rect::new(
            x + self.padding.left,
            y + self.padding.top,
            (self.bounds.width - self.padding.horizontal()).max(0.0),
            (self.bounds.height - self.padding.vertical()).max(0.0),
        );
        for child in &mut self.children {
            let placed = gravity::apply(child.gravity, child.size, content, self.direction);
            child.widget.set_origin(placed.x, placed.y);
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn paint(&self, canvas: &mut Canvas) {
        for child in &self.children {
            child.widget.paint(canvas);
        }
    }

    impl_dirty_flags!();
}

/// Create an empty frame container.
pub fn frame() -> Frame {
    Frame::new()
}
