use crate::ui::core::negotiate::Extent;
use crate::ui::core::surface::Surface;
use crate::ui::core::widget::Widget;

/// Empty space for padding out rows and columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blank {
    pub width: Extent,
    pub height: Extent,
}

impl Blank {
    pub const fn new(
        min_width: usize,
        max_width: usize,
        min_height: usize,
        max_height: usize,
    ) -> Self {
        Self {
            width: Extent::new(min_width, max_width),
            height: Extent::new(min_height, max_height),
        }
    }

    pub const fn fixed(width: usize, height: usize) -> Self {
        Self {
            width: Extent::fixed(width),
            height: Extent::fixed(height),
        }
    }

    /// Takes no room of its own but soaks up any slack.
    pub const fn fill() -> Self {
        Self {
            width: Extent::at_least(0),
            height: Extent::at_least(0),
        }
    }
}

impl Widget for Blank {
    fn req_width(&self) -> Extent {
        self.width
    }

    fn req_height(&self) -> Extent {
        self.height
    }

    fn draw(&self, _surface: &mut Surface<'_>) {}
}
