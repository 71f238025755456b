use std::io;

use tessera::settings::{load_settings, settings_path_from_env, DrawSettings};
use tessera::tui::show_until_key;
use tessera::tui::terminal_guard::TerminalGuard;
use tessera::ui::backend::terminal::TerminalBackend;
use tessera::ui::core::style::Color;
use tessera::ui::core::widget::Widget;
use tessera::ui::widgets::{Label, Tint};
use tessera::{column, grid, row};

mod logging;

fn tint<W: Widget>(fg: Color, child: W) -> Tint<W> {
    Tint::new(child).fg(fg)
}

fn settings() -> DrawSettings {
    let Some(path) = settings_path_from_env() else {
        return DrawSettings::default();
    };
    match load_settings(&path) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "load settings failed");
            DrawSettings::default()
        }
    }
}

fn main() -> io::Result<()> {
    let _logging = logging::init();
    let settings = settings();

    let root = grid![
        row![Label::new("wind speed:"), Label::new("40 knots/s")],
        row![
            Label::new("species:"),
            Label::new("african swallow"),
            tint(
                Color::YELLOW,
                column![Label::new("// multiple line"), Label::new("// comment")],
            ),
        ],
        row![
            Label::new("laden:"),
            tint(Color::RED, Label::new("true")),
            tint(Color::YELLOW, Label::new("// weight of coconut required!")),
        ],
    ];

    let guard = TerminalGuard::new()?;
    let mut backend = TerminalBackend::new(io::stdout())?;
    let result = show_until_key(&mut backend, &root, &settings);
    drop(guard);

    if let Err(error) = &result {
        tracing::error!(error = %error, "demo failed");
    }
    result
}
