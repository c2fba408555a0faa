//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use tracing::{error, info};

use crate::app::actions::{Quit, new_key_bindings};
use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::config::DashboardConfig;
use crate::features::dashboard::controller::DashboardController;
use crate::features::dashboard::page::DashboardPage;
use crate::i18n::t;
use crate::state::sidebar_state::SidebarState;

/// Run the dashboard application
pub fn run_app(config: DashboardConfig) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up key bindings and action handlers
        cx.bind_keys(new_key_bindings());
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let locale = config.resolve_locale();
        let entities = AppEntities::init(locale, cx);
        cx.set_global(entities.clone());
        info!(locale = locale.code(), "Locale selected");

        let datasets = DashboardController::new().load_datasets();
        let initial_sidebar = SidebarState::from_open(config.sidebar_open);
        let tabs_interactive = config.tabs.interactive;

        // Create main window
        let bounds = Bounds::centered(
            None,
            size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(t(locale, "app.title")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let page = cx.new(|cx| {
                DashboardPage::new(entities.clone(), datasets, tabs_interactive, cx)
            });
            cx.new(|cx| Workspace::new(entities.clone(), initial_sidebar, page, window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
