//! Overtip - rich tooltip overlays for GPUI.
//!
//! Opens a small window with a button that shows a bordered rich tooltip
//! next to itself while the pointer is over it.

mod app;

use app::DemoApp;
use gpui::{px, size, App, AppContext, Application, Bounds, WindowBounds, WindowOptions};
use overtip_core::logging::init_logging;
use overtip_core::settings::default_data_dir;
use overtip_core::Settings;
use overtip_ui::OvertipTheme;

fn main() {
    // Settings pick the log filter, so they are read first and any load
    // failure is reported once the subscriber exists.
    let startup = Settings::load_at_startup(&default_data_dir());
    let _logging_guard = init_logging(&startup.settings);
    startup.report();
    let settings = startup.settings;

    tracing::info!("Starting Overtip");

    Application::new().run(move |cx: &mut App| {
        cx.set_global(settings);
        cx.set_global(OvertipTheme::for_appearance(cx.window_appearance()));

        let bounds = Bounds::centered(None, size(px(480.0), px(320.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            focus: true,
            show: true,
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            window.on_window_should_close(cx, |window, cx| {
                window.remove_window();
                cx.quit();
                false
            });

            cx.new(|cx| DemoApp::new(window, cx))
        });
        if let Err(e) = opened {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
