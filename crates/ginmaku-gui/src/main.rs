mod app;
mod keyboard;
mod poster_cache;
mod screen;
mod style;
mod subscription;
mod theme;
mod widgets;
mod window_state;

use clap::Parser;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Desktop movie discovery: debounced search, pagination, and trending
/// search terms.
#[derive(Parser)]
#[command(name = "ginmaku", version, about)]
struct Cli {
    /// Log at trace level instead of debug.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> iced::Result {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose);

    let ws = window_state::WindowState::load();
    let position = match ws.position() {
        Some(point) => iced::window::Position::Specific(point),
        None => iced::window::Position::Centered,
    };
    let win = iced::window::Settings {
        size: ws.size(),
        position,
        ..Default::default()
    };

    iced::application(app::Ginmaku::new, app::Ginmaku::update, app::Ginmaku::view)
        .title(app::Ginmaku::title)
        .subscription(app::Ginmaku::subscription)
        .theme(app::Ginmaku::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window(win)
        .run()
}

/// Log to stderr and a daily-rotated file under the user data directory.
///
/// The returned guard must stay alive for the file writer to flush.
fn init_logging(verbose: bool) -> tracing_appender::non_blocking::WorkerGuard {
    let filter = if verbose {
        "ginmaku=trace,ginmaku_core=trace,ginmaku_api=trace"
    } else {
        "ginmaku=debug,ginmaku_core=debug,ginmaku_api=debug"
    };

    let log_dir = directories::ProjectDirs::from("", "", "ginmaku")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(log_dir, "ginmaku.log"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file_writer.and(std::io::stderr))
        .with_ansi(false)
        .init();

    guard
}
