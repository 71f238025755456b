//! One-dimensional containers.

use crate::ui::core::negotiate::{distribute, Extent};
use crate::ui::core::surface::Surface;
use crate::ui::core::widget::{coord, Widget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn extent(self, widget: &dyn Widget) -> Extent {
        match self {
            Axis::Horizontal => widget.req_width(),
            Axis::Vertical => widget.req_height(),
        }
    }

    fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Along the split axis the children's requirements add up.
fn main_extent(children: &[Box<dyn Widget>], axis: Axis) -> Extent {
    children
        .iter()
        .map(|c| axis.extent(&**c))
        .fold(Extent::default(), Extent::saturating_add)
}

/// Across it, the container is as large as its largest child asks.
fn cross_extent(children: &[Box<dyn Widget>], axis: Axis) -> Extent {
    children
        .iter()
        .map(|c| axis.cross().extent(&**c))
        .fold(Extent::default(), Extent::max_each)
}

fn draw_split(children: &[Box<dyn Widget>], surface: &mut Surface<'_>, axis: Axis) {
    if children.is_empty() || surface.is_absent() {
        return;
    }
    let (along, across) = match axis {
        Axis::Horizontal => (surface.width(), surface.height() as i32),
        Axis::Vertical => (surface.height(), surface.width() as i32),
    };
    let reqs: Vec<Extent> = children.iter().map(|c| axis.extent(&**c)).collect();
    let sizes = distribute(along as usize, &reqs);

    let mut offset = 0usize;
    for (child, size) in children.iter().zip(sizes) {
        let mut sub = match axis {
            Axis::Horizontal => surface.clip(coord(offset), 0, coord(size), across),
            Axis::Vertical => surface.clip(0, coord(offset), across, coord(size)),
        };
        child.draw(&mut sub);
        offset = offset.saturating_add(size);
    }
}

macro_rules! impl_stack {
    ($name:ident) => {
        impl $name {
            pub fn new(children: Vec<Box<dyn Widget>>) -> Self {
                Self { children }
            }

            pub fn push(&mut self, child: impl Widget + 'static) {
                self.children.push(Box::new(child));
            }

            pub fn with(mut self, child: impl Widget + 'static) -> Self {
                self.push(child);
                self
            }

            pub fn children(&self) -> &[Box<dyn Widget>] {
                &self.children
            }

            pub fn len(&self) -> usize {
                self.children.len()
            }

            pub fn is_empty(&self) -> bool {
                self.children.is_empty()
            }
        }

        impl FromIterator<Box<dyn Widget>> for $name {
            fn from_iter<I: IntoIterator<Item = Box<dyn Widget>>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("len", &self.children.len())
                    .finish()
            }
        }
    };
}

/// Children side by side, splitting the width.
#[derive(Default)]
pub struct Row {
    children: Vec<Box<dyn Widget>>,
}

/// Children stacked top to bottom, splitting the height.
#[derive(Default)]
pub struct Column {
    children: Vec<Box<dyn Widget>>,
}

impl_stack!(Row);
impl_stack!(Column);

impl Widget for Row {
    fn req_width(&self) -> Extent {
        main_extent(&self.children, Axis::Horizontal)
    }

    fn req_height(&self) -> Extent {
        cross_extent(&self.children, Axis::Horizontal)
    }

    fn draw(&self, surface: &mut Surface<'_>) {
        draw_split(&self.children, surface, Axis::Horizontal);
    }
}

impl Widget for Column {
    fn req_width(&self) -> Extent {
        cross_extent(&self.children, Axis::Vertical)
    }

    fn req_height(&self) -> Extent {
        main_extent(&self.children, Axis::Vertical)
    }

    fn draw(&self, surface: &mut Surface<'_>) {
        draw_split(&self.children, surface, Axis::Vertical);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/stack.rs"]
mod tests;
