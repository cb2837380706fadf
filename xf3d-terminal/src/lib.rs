//! Terminal front end for the XF3D transformation pipeline
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use xf3d_core::Mesh;

pub mod camera;
pub mod renderer;
pub mod scene;

pub use camera::Camera;
pub use renderer::AsciiRenderer;
pub use scene::{Param, Scene, SceneKind};

/// Rows reserved at the top of the screen for the status overlay
const OVERLAY_ROWS: u16 = 3;

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    mesh: Mesh,
    scene: Scene,
    camera: Camera,
    renderer: AsciiRenderer,
    running: bool,
    started: Instant,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
    status: Option<String>,
}

impl TerminalApp {
    /// `mesh` is snapshotted here; every frame redraws it from that snapshot
    pub fn new(mut mesh: Mesh, scene: Scene) -> io::Result<Self> {
        if !mesh.is_initialized() {
            mesh.initialize_for_transforming().map_err(invalid_data)?;
        }

        let (width, height) = terminal::size()?;
        let height = height.saturating_sub(OVERLAY_ROWS);

        Ok(Self {
            mesh,
            camera: Camera::new(width as u32, height as u32, scene.kind.camera_distance()),
            scene,
            renderer: AsciiRenderer::new(width as usize, height as usize),
            running: true,
            started: Instant::now(),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
            status: None,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Tab | KeyCode::Right => self.scene.select_next(),
                KeyCode::BackTab | KeyCode::Left => self.scene.select_previous(),
                KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('w') => self.scene.adjust(1.0),
                KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('s') => self.scene.adjust(-1.0),
                KeyCode::PageUp => self.scene.adjust(10.0),
                KeyCode::PageDown => self.scene.adjust(-10.0),
                KeyCode::Char('p') if self.scene.kind == SceneKind::Viewer => {
                    self.scene.cycle_projection();
                }
                KeyCode::Char('r') => self.scene.reset(),
                _ => {}
            },
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        let height = height.saturating_sub(OVERLAY_ROWS);
        tracing::debug!(width, height, "Terminal resized");
        self.renderer = AsciiRenderer::new(width as usize, height as usize);
        self.camera = Camera::new(width as u32, height as u32, self.scene.kind.camera_distance());
    }

    fn render(&mut self) -> io::Result<()> {
        let time = self.started.elapsed().as_secs_f32();

        // Clear renderer
        self.renderer.clear();

        // A failed frame keeps the previous vertex buffers; show why instead
        // of tearing down the terminal.
        self.status = self
            .scene
            .render(&mut self.mesh, &mut self.renderer, &self.camera, time)
            .err()
            .map(|e| e.to_string());

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, OVERLAY_ROWS))?;

        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let param = self.scene.selected();
        let mut header = format!(
            "XF3D | {} | FPS: {:.1} | {}: {:.2}",
            self.scene.kind.name(),
            self.fps,
            param.label(),
            self.scene.value(param),
        );
        if self.scene.kind == SceneKind::Viewer {
            header.push_str(&format!(" | Projection: {}", self.scene.projection_label()));
        }
        let help = "Tab/Arrows=Select  Up/Down=Adjust  PgUp/PgDn=x10  P=Projection  R=Reset  Q=Quit";

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(header),
            cursor::MoveTo(0, 1),
            terminal::Clear(terminal::ClearType::CurrentLine),
            SetForegroundColor(Color::DarkGrey),
            Print(help),
            cursor::MoveTo(0, 2),
            terminal::Clear(terminal::ClearType::CurrentLine),
        )?;
        if let Some(status) = &self.status {
            queue!(stdout, SetForegroundColor(Color::Red), Print(status))?;
        }
        queue!(stdout, ResetColor)?;

        stdout.flush()?;
        Ok(())
    }
}

fn invalid_data(err: xf3d_core::TransformError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}
