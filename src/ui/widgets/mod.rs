//! The widget set: leaves ([`Label`], [`Blank`]), a color decorator
//! ([`Tint`]) and the containers ([`Row`], [`Column`], [`Grid`]).

mod blank;
mod grid;
mod label;
mod stack;
mod tint;

pub use blank::Blank;
pub use grid::Grid;
pub use label::Label;
pub use stack::{Column, Row};
pub use tint::Tint;

/// Builds a [`Row`] from widgets of any type.
///
/// ```
/// use tessera::row;
/// use tessera::ui::widgets::{Blank, Label};
///
/// let row = row![Label::new("name:"), Blank::fill(), Label::new("value")];
/// assert_eq!(row.len(), 3);
/// ```
#[macro_export]
macro_rules! row {
    ($($child:expr),* $(,)?) => {
        $crate::ui::widgets::Row::new(vec![
            $(Box::new($child) as Box<dyn $crate::ui::core::widget::Widget>),*
        ])
    };
}

/// Builds a [`Column`] from widgets of any type.
#[macro_export]
macro_rules! column {
    ($($child:expr),* $(,)?) => {
        $crate::ui::widgets::Column::new(vec![
            $(Box::new($child) as Box<dyn $crate::ui::core::widget::Widget>),*
        ])
    };
}

/// Builds a [`Grid`] from [`Row`]s.
#[macro_export]
macro_rules! grid {
    ($($row:expr),* $(,)?) => {
        $crate::ui::widgets::Grid::new(vec![$($row),*])
    };
}
