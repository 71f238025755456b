pub mod buffer;
pub mod geom;
pub mod negotiate;
pub mod style;
pub mod surface;
pub mod widget;

pub use buffer::{Cell, CellBuffer};
pub use geom::{Pos, Rect};
pub use negotiate::{distribute, Extent};
pub use style::{Color, Style};
pub use surface::Surface;
pub use widget::Widget;
