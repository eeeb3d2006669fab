mod keymap;

use anyhow::Result;
use clap::Parser;
use dronebay_kernel::{ActorTuning, Scene};
use dronebay_render::render_scene;
use dronebay_render_wgpu::{GpuContext, WgpuRenderer};
use dronebay_tools::SceneInspector;
use egui::Context as EguiContext;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Simulation step per rendered frame. The scene is not wall-clock driven.
const FIXED_DT: f32 = 1.0 / 60.0;

#[derive(Parser)]
#[command(name = "dronebay-desktop", about = "Fly the drone around the arena")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML file overriding actor tuning
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value = "800")]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "600")]
    height: u32,

    /// Initial camera (1 = global, 2 = chopper, 3 = first-person)
    #[arg(long, default_value = "1")]
    camera: usize,
}

/// Application state.
struct AppState {
    scene: Scene,
    show_hud: bool,
}

impl AppState {
    fn new(scene: Scene) -> Self {
        Self {
            scene,
            show_hud: true,
        }
    }

    fn handle_key(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        if let Some(action) = keymap::action_for_key(key) {
            action.apply(&mut self.scene);
            return;
        }
        match key {
            KeyCode::F1 => self.show_hud = !self.show_hud,
            KeyCode::Escape => event_loop.exit(),
            _ => {}
        }
    }

    /// Draw the HUD and switch to any camera row clicked this frame.
    fn run_hud(&mut self, ctx: &EguiContext) {
        if let Some(index) = self.draw_hud(ctx) {
            self.scene.select_camera(index);
        }
    }

    /// Returns the camera row clicked this frame, if any.
    fn draw_hud(&self, ctx: &EguiContext) -> Option<usize> {
        if !self.show_hud {
            return None;
        }
        let mut clicked = None;

        let summary = SceneInspector::summary(&self.scene);
        let actor = &summary.actor;

        egui::SidePanel::left("hud")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Drone");
                ui.separator();
                ui.label(format!("Tick: {}", summary.tick));
                ui.label(format!(
                    "Camera {}: {}",
                    summary.active_camera + 1,
                    summary.active().kind
                ));
                ui.separator();

                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    actor.position[0], actor.position[1], actor.position[2]
                ));
                ui.label(format!(
                    "Pitch {:.0}  Yaw {:.0}  Roll {:.0}",
                    actor.rotation.pitch, actor.rotation.yaw, actor.effective_roll
                ));
                ui.label(format!("Rotor: {:.0} deg/s", actor.spin_rate));
                ui.label(format!("Phase: {:.0}", actor.spin_phase));
                match actor.roll_progress {
                    Some(progress) => {
                        ui.add(egui::ProgressBar::new(progress / 360.0).text("Rolling"));
                    }
                    None => {
                        ui.label("Roll: idle");
                    }
                }

                ui.separator();
                ui.heading("Cameras");
                for (i, cam) in summary.cameras.iter().enumerate() {
                    let label = format!(
                        "{} {} ({:.1}, {:.1}, {:.1})",
                        i + 1,
                        cam.kind,
                        cam.position[0],
                        cam.position[1],
                        cam.position[2]
                    );
                    if ui
                        .selectable_label(i == summary.active_camera, label)
                        .clicked()
                    {
                        clicked = Some(i);
                    }
                }

                ui.separator();
                ui.small(keymap::KEY_HELP);
            });
        clicked
    }
}

/// Everything that exists only once a window is up.
struct Gpu {
    window: Arc<Window>,
    context: GpuContext,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

struct GpuApp {
    state: AppState,
    size: PhysicalSize<u32>,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
}

impl GpuApp {
    fn new(scene: Scene, size: PhysicalSize<u32>) -> Self {
        Self {
            state: AppState::new(scene),
            size,
            gpu: None,
            egui_ctx: EguiContext::default(),
        }
    }

    fn init_gpu(&self, event_loop: &ActiveEventLoop) -> Result<Gpu> {
        let attrs = Window::default_attributes()
            .with_title("Drone Project")
            .with_inner_size(self.size);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        let context = GpuContext::new(window.clone(), size.width, size.height)?;
        let format = context.config.format;
        let renderer = WgpuRenderer::new(&context.device, format, size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&context.device, format, None, 1, false);

        Ok(Gpu {
            window,
            context,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn redraw(&mut self) {
        self.state.scene.tick(FIXED_DT);

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let output = match gpu.context.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.context.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        render_scene(&self.state.scene, &mut gpu.renderer);
        gpu.renderer
            .present(&gpu.context.device, &gpu.context.queue, &view);

        let raw_input = gpu.egui_winit.take_egui_input(&gpu.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            self.state.run_hud(ctx);
        });
        gpu.egui_winit
            .handle_platform_output(&gpu.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.context.config.width, gpu.context.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let device = &gpu.context.device;
        let queue = &gpu.context.queue;
        for (id, image_delta) in &full_output.textures_delta.set {
            gpu.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        gpu.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gpu.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(id);
        }

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match self.init_gpu(event_loop) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gpu) = &mut self.gpu {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                // The camera projection keeps its construction-time aspect.
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(new_size.width, new_size.height);
                    gpu.renderer.resize(
                        &gpu.context.device,
                        gpu.context.config.width,
                        gpu.context.config.height,
                    );
                }
            }
            // Press and key-repeat both fire; releases are ignored.
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.state.handle_key(key, event_loop);
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("dronebay-desktop starting");

    let tuning = match &cli.tuning {
        Some(path) => ActorTuning::load(path)?,
        None => ActorTuning::default(),
    };
    let width = cli.width.max(1);
    let height = cli.height.max(1);
    let mut scene = Scene::with_tuning(tuning, width as f32 / height as f32);
    scene.select_camera(cli.camera.saturating_sub(1));

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(scene, PhysicalSize::new(width, height));
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hud_frame(state: &mut AppState) {
        let ctx = EguiContext::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| state.run_hud(ctx));
    }

    #[test]
    fn hud_frame_without_clicks_keeps_camera() {
        let mut state = AppState::new(Scene::new());
        state.scene.select_camera(1);
        hud_frame(&mut state);
        assert_eq!(state.scene.active_camera_index(), 1);
    }

    #[test]
    fn hud_reports_no_click_without_input() {
        let state = AppState::new(Scene::new());
        let ctx = EguiContext::default();
        let mut clicked = Some(usize::MAX);
        let _ = ctx.run(egui::RawInput::default(), |ctx| clicked = state.draw_hud(ctx));
        assert_eq!(clicked, None);
        assert_eq!(state.scene.active_camera_index(), 0);
    }

    #[test]
    fn hidden_hud_reports_no_click() {
        let mut state = AppState::new(Scene::new());
        state.show_hud = false;
        let ctx = EguiContext::default();
        let mut clicked = Some(0);
        let _ = ctx.run(egui::RawInput::default(), |ctx| clicked = state.draw_hud(ctx));
        assert_eq!(clicked, None);
    }
}
