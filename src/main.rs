use std::process::ExitCode;

use frustum_lab::input::InputEvent;
use frustum_lab::render::SoftwareBackend;
use frustum_lab::window::{FrameLimiter, Window};
use frustum_lab::{SessionState, ViewerConfig, ViewerError, VisualizationMode, Visualizer};

fn window_title(base: &str, mode: VisualizationMode) -> String {
    format!("{base} - {mode}")
}

fn run(config: &ViewerConfig) -> Result<(), ViewerError> {
    config.validate()?;
    let mut visualizer = Visualizer::new(config)?;

    let settings = &config.window;
    let mut session = SessionState::from_config(config);
    let mut window = Window::new(
        &window_title(&settings.title, session.mode),
        settings.width,
        settings.height,
    )
    .map_err(ViewerError::Platform)?;
    let mut backend = SoftwareBackend::new(window.width(), window.height());
    let mut frame_limiter = FrameLimiter::new(&window, settings.frame_delay);
    let controller = config.camera.controller;

    log::info!("starting in {} mode; space cycles, escape quits", session.mode);

    while session.is_running() {
        // Process input
        for event in window.poll_events() {
            if let InputEvent::Resize { width, height } = event {
                log::debug!("resized to {width}x{height}");
                window.resize(width, height).map_err(ViewerError::Platform)?;
                backend.resize(width, height);
                visualizer.set_viewport(width, height)?;
            }
            if session.handle_event(&event, &controller) {
                window
                    .set_title(&window_title(&settings.title, session.mode))
                    .map_err(ViewerError::Platform)?;
            }
        }
        if !session.is_running() {
            break;
        }

        // Render
        visualizer.render_frame(&session, &mut backend);
        window
            .present(backend.frame_buffer())
            .map_err(ViewerError::Platform)?;

        frame_limiter.wait_and_get_delta(&window);
    }

    log::info!("shutting down");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = ViewerConfig::default();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
