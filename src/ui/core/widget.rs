use super::negotiate::Extent;
use super::surface::Surface;

/// A node of the UI tree: declares how much room it wants on each axis and
/// paints itself into whatever surface it is given.
pub trait Widget {
    fn req_width(&self) -> Extent;

    fn req_height(&self) -> Extent;

    fn draw(&self, surface: &mut Surface<'_>);
}

impl<W: Widget + ?Sized> Widget for &W {
    fn req_width(&self) -> Extent {
        (**self).req_width()
    }

    fn req_height(&self) -> Extent {
        (**self).req_height()
    }

    fn draw(&self, surface: &mut Surface<'_>) {
        (**self).draw(surface)
    }
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn req_width(&self) -> Extent {
        (**self).req_width()
    }

    fn req_height(&self) -> Extent {
        (**self).req_height()
    }

    fn draw(&self, surface: &mut Surface<'_>) {
        (**self).draw(surface)
    }
}

/// Converts a layout size into a clip coordinate.
pub(crate) fn coord(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
