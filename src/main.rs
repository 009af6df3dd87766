//! Route Trace.
//!
//! Route von Hand auf der Karte zeichnen, bestätigen und ablaufen lassen,
//! während Position und Kompass-Kurs des Geräts angezeigt werden.

use eframe::egui;
use route_trace::{ui, AppController, AppIntent, AppState, TraceOptions, TrackingRuntime};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Route Trace v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_title("Route Trace"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Route Trace",
            options,
            Box::new(|cc| Ok(Box::new(TraceApp::new(&cc.egui_ctx)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct TraceApp {
    state: AppState,
    controller: AppController,
    runtime: TrackingRuntime,
    input: ui::InputState,
    controls: ui::ControlsState,
}

impl TraceApp {
    fn new(ctx: &egui::Context) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = TraceOptions::config_path();
        let options = TraceOptions::load_from_file(&config_path);
        if !config_path.exists() {
            // Vorlage zum Anpassen anlegen
            if let Err(e) = options.save_to_file(&config_path) {
                log::warn!("Optionen-Vorlage nicht geschrieben: {:#}", e);
            }
        }

        let mut runtime = TrackingRuntime::simulated(&options);
        let repaint_ctx = ctx.clone();
        runtime.set_waker(move || repaint_ctx.request_repaint());

        let mut app = Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            runtime,
            input: ui::InputState::new(),
            controls: ui::ControlsState::new(),
        };
        app.process_events(vec![AppIntent::TrackingStartupRequested]);
        app.runtime.process_requests(&mut app.state);
        app
    }
}

impl eframe::App for TraceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = self.runtime.drain();
        events.extend(self.collect_ui_events(ctx));

        self.process_events(events);
        self.runtime.process_requests(&mut self.state);

        self.maybe_request_repaint(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.runtime.shutdown();
    }
}

impl TraceApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_controls(ctx, &self.state, &mut self.controls));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_notice_dialog(ctx, &self.state.ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    self.state.is_drawing_mode(),
                    self.state.view.drag_enabled,
                    &self.state.options.map,
                ));

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(ui.painter(), rect, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        // Stop-Geste braucht Frames im Tick-Takt, auch ohne Pointer-Bewegung
        if self.state.long_press_active() || self.controls.stop_held() {
            ctx.request_repaint_after(self.state.modes.long_press_config().tick);
        } else if ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
