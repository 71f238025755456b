use crate::ui::core::negotiate::Extent;
use crate::ui::core::surface::Surface;
use crate::ui::core::widget::Widget;

/// A single line of constant text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label {
    text: String,
    width: usize,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.chars().count();
        Self { text, width }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl Widget for Label {
    fn req_width(&self) -> Extent {
        Extent::fixed(self.width)
    }

    fn req_height(&self) -> Extent {
        Extent::fixed(1)
    }

    /// Paints the first row only; text wider than the surface is cut off.
    fn draw(&self, surface: &mut Surface<'_>) {
        let w = surface.width() as i32;
        let h = surface.height().min(1) as i32;
        surface.clip(0, 0, w, h).print(&self.text);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/label.rs"]
mod tests;
