/// Terminal host for the dice scene
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self},
};
use dice_core::{RenderLoop, Scene, SystemClock};
use log::{debug, info};
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};

pub mod logging;
pub mod renderer;

pub use renderer::AsciiRenderer;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    render_loop: RenderLoop<SystemClock>,
    renderer: AsciiRenderer<Stdout>,
    running: bool,
    frame_budget: Duration,
    last_fps_sample: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(scene: Scene, target_fps: u32) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        let mut renderer = AsciiRenderer::new(stdout(), width as usize, height as usize);
        renderer.set_display_size(width, height);

        Ok(Self {
            render_loop: RenderLoop::new(scene, SystemClock::new()),
            renderer,
            running: true,
            frame_budget: Duration::from_secs_f32(1.0 / target_fps.max(1) as f32),
            last_fps_sample: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        info!("stopped after {} frames", self.render_loop.frames());
        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.running {
            let frame_start = Instant::now();

            // Displayed size, read once per frame
            let (columns, rows) = terminal::size()?;
            self.renderer.set_display_size(columns, rows);

            self.renderer.set_status(format!(
                "Polyhedral dice | FPS: {:.1} | q to quit",
                self.fps
            ));
            self.render_loop.frame(&mut self.renderer)?;

            // Frame timing; terminal events are drained while waiting
            self.frame_count += 1;
            while let Some(remaining) = self.frame_budget.checked_sub(frame_start.elapsed()) {
                if !event::poll(remaining)? {
                    break;
                }
                self.handle_event(event::read()?);
                if !self.running {
                    break;
                }
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_fps_sample).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_fps_sample).as_secs_f32();
                debug!("{:.1} fps", self.fps);
                self.frame_count = 0;
                self.last_fps_sample = now;
            }
        }

        Ok(())
    }

    /// Resizes are picked up by the per-frame size check; the only other
    /// events acted on are the ones that close the terminal session.
    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }) => self.running = false,
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => self.running = false,
            Event::Resize(columns, rows) => debug!("terminal resized to {columns}x{rows}"),
            _ => {}
        }
    }
}
