use std::rc::Rc;

use anyhow::Result;
use fontdue::Font;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use gridpass::commands::Cmd;
use gridpass::config::AppConfig;
use gridpass::effects::execute;
use gridpass::input::handle_key;
use gridpass::messages::{Msg, UiMsg};
use gridpass::model::AppModel;
use gridpass::update::update;
use gridpass::view::font::load_font;

use super::renderer::Renderer;

const WINDOW_TITLE: &str = "Graphical Password Generator";

pub struct App {
    model: AppModel,
    /// Held until the renderer is created on `resumed`
    font: Option<Font>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let font = load_font(config.font_path.as_deref());
        Self {
            model: AppModel::new(config),
            font,
            renderer: None,
            window: None,
            context: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.model.window_size();
        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create softbuffer context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context, self.font.take())?;

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(&self.model) {
                        tracing::error!("Render error: {}", e);
                    }
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => update(
                &mut self.model,
                Msg::Ui(UiMsg::PointerMoved {
                    x: position.x,
                    y: position.y,
                }),
            ),
            WindowEvent::CursorLeft { .. } => update(&mut self.model, Msg::Ui(UiMsg::PointerLeft)),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let msg = match state {
                    ElementState::Pressed => UiMsg::PointerPressed,
                    ElementState::Released => UiMsg::PointerReleased,
                };
                update(&mut self.model, Msg::Ui(msg))
            }
            WindowEvent::KeyboardInput { event, .. } => handle_key(
                &mut self.model,
                &event.logical_key,
                event.state,
                event.repeat,
            ),
            _ => None,
        }
    }

    /// Execute a command. Returns whether the window needs a repaint.
    fn process_cmd(&mut self, event_loop: &ActiveEventLoop, cmd: Cmd) -> bool {
        let effects = execute(&mut self.model, cmd);
        if effects.quit {
            event_loop.exit();
        }
        effects.redraw
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to create window: {}", e);
                eprintln!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window_id != window.id() {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        if let Some(cmd) = self.handle_event(&event) {
            if self.process_cmd(event_loop, cmd) {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
