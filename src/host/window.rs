//! Desktop window host

use std::thread;
use std::time::Duration;

use log::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowId};

use super::HostError;
use crate::core::PacerConfig;
use crate::pacer::{Host, ShutdownSignal, SurfaceState};

/// Window state tracked from winit events
struct WindowState {
    title: String,
    size: PhysicalSize<u32>,
    window: Option<Window>,
    focused: bool,
    occluded: bool,
    minimized: bool,
    paused: bool,
    drawing_blocked: bool,
    /// Input arrived since the last reset
    input_seen: bool,
    creation_error: Option<String>,
    shutdown: ShutdownSignal,
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(self.size);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!("window created: {}x{}", self.size.width, self.size.height);
                self.focused = window.has_focus();
                self.window = Some(window);
            }
            Err(e) => {
                error!("failed to create window: {e}");
                self.creation_error = Some(e.to_string());
                self.shutdown.raise();
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
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                self.shutdown.raise();
                event_loop.exit();
            }
            WindowEvent::Focused(focused) => self.focused = focused,
            WindowEvent::Occluded(occluded) => self.occluded = occluded,
            WindowEvent::Resized(size) => {
                self.minimized = size.width == 0 || size.height == 0;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input_seen = true;
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::Pause)
                {
                    self.paused = !self.paused;
                    info!("paused: {}", self.paused);
                }
            }
            WindowEvent::MouseInput { .. }
            | WindowEvent::MouseWheel { .. }
            | WindowEvent::CursorMoved { .. } => self.input_seen = true,
            _ => {}
        }
    }
}

/// Interactive host backed by a winit window.
///
/// Events are pumped from [`Host::poll`] and [`Host::wait_for_input`], so the
/// pacer keeps ownership of the loop. Closing the window raises the shutdown
/// signal handed to [`WindowHost::new`].
pub struct WindowHost {
    event_loop: EventLoop<()>,
    state: WindowState,
}

impl WindowHost {
    /// Open the window described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop or the window cannot be created
    pub fn new(config: &PacerConfig, shutdown: ShutdownSignal) -> Result<Self, HostError> {
        let event_loop = EventLoop::new().map_err(|e| HostError::EventLoop(e.to_string()))?;

        let mut host = Self {
            event_loop,
            state: WindowState {
                title: config.title.clone(),
                size: PhysicalSize::new(config.width, config.height),
                window: None,
                focused: false,
                occluded: false,
                minimized: false,
                paused: false,
                drawing_blocked: false,
                input_seen: false,
                creation_error: None,
                shutdown,
            },
        };

        // The window is created on the first resume.
        host.pump(Some(Duration::ZERO));
        if let Some(e) = host.state.creation_error.take() {
            return Err(HostError::Window(e));
        }
        Ok(host)
    }

    /// Pause or resume the simulation
    pub fn set_paused(&mut self, paused: bool) {
        self.state.paused = paused;
    }

    /// Switch drawing off or back on
    pub fn set_drawing_blocked(&mut self, blocked: bool) {
        self.state.drawing_blocked = blocked;
    }

    fn pump(&mut self, timeout: Option<Duration>) {
        if let PumpStatus::Exit(code) = self.event_loop.pump_app_events(timeout, &mut self.state)
        {
            info!("event loop exited with code {code}");
            self.state.shutdown.raise();
        }
    }
}

impl Host for WindowHost {
    fn surface(&self) -> Option<SurfaceState> {
        let window = self.state.window.as_ref()?;
        let exclusive_fullscreen = matches!(window.fullscreen(), Some(Fullscreen::Exclusive(_)));
        Some(SurfaceState {
            active: self.state.focused,
            exclusive_fullscreen,
            visible: !self.state.occluded && !self.state.minimized,
            drawing_blocked: self.state.drawing_blocked,
            paused: self.state.paused,
        })
    }

    fn poll(&mut self) {
        self.pump(Some(Duration::ZERO));
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn wait_for_input(&mut self, timeout: Duration) -> bool {
        self.state.input_seen = false;
        self.pump(Some(timeout));
        self.state.input_seen
    }
}
