use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use gridpass::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    gridpass::tracing::init();

    let config = args.into_config();
    tracing::info!(
        "Starting with {}x{} canvas, {}x{} grid",
        config.canvas_width,
        config.canvas_height,
        config.grid_size,
        config.grid_size
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
