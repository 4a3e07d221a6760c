/// Terminal host for the fan simulator: event loop, input dispatch,
/// and ASCII output
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use log::info;
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use whirl_core::{Archetype, Camera, Fan};

pub mod renderer;

pub use renderer::AsciiRenderer;

/// Default orbit azimuth (45 degrees, three-quarter view)
const DEFAULT_AZIMUTH: f32 = std::f32::consts::FRAC_PI_4;
/// Orbit elevation (20 degrees above the blade plane)
const ELEVATION: f32 = 20.0 * std::f32::consts::PI / 180.0;
/// Orbit step per key press, in radians
const ORBIT_STEP: f32 = 0.1;
/// Camera distance as a multiple of the frame bounds
const DISTANCE_SCALE: f32 = 2.4;

/// Main application struct for the interactive terminal simulator
pub struct TerminalApp {
    fan: Fan,
    camera: Camera,
    renderer: AsciiRenderer,
    azimuth: f32,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(archetype: Archetype) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            fan: Fan::new(archetype),
            camera: Camera::new(width as u32, height as u32),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            azimuth: DEFAULT_AZIMUTH,
            running: true,
            last_frame: Instant::now(),
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

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(16); // ~60 FPS target
        let mut previous = Instant::now();

        while self.running {
            let frame_start = Instant::now();

            // Input intents are applied between frames
            while event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Physics step with measured elapsed time
            let dt = frame_start.duration_since(previous).as_secs_f32();
            previous = frame_start;
            self.fan.update_physics(dt);

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
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("quit requested");
                    self.running = false;
                }
                KeyCode::Up => self.fan.speed_up(),
                KeyCode::Down => self.fan.speed_down(),
                KeyCode::Char(' ') => self.fan.toggle_oscillate(),
                KeyCode::Char('o') => self.fan.toggle_power(),
                KeyCode::Char('l') => self.fan.cycle_lighting(),
                KeyCode::Char('a') | KeyCode::Left => self.azimuth -= ORBIT_STEP,
                KeyCode::Char('d') | KeyCode::Right => self.azimuth += ORBIT_STEP,
                KeyCode::Char('1') => self.fan.reconfigure(Archetype::Ceiling),
                KeyCode::Char('2') => self.fan.reconfigure(Archetype::Table),
                KeyCode::Char('3') => self.fan.reconfigure(Archetype::Tower),
                KeyCode::Char('4') => self.fan.reconfigure(Archetype::Industrial),
                KeyCode::Char('5') => self.fan.reconfigure(Archetype::Desk),
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let frame = self.fan.render();

        // Frame the fan: orbit distance follows the bounds scale, and
        // the look-at point centers the visible z extent
        self.camera.target.z = (frame.floor + 1.0) / 2.0;
        self.camera
            .orbit(self.azimuth, ELEVATION, frame.bounds * DISTANCE_SCALE);

        self.renderer.clear();
        self.renderer.render_frame(&frame, &self.camera);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.draw(&mut stdout)?;

        // Status line overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "{} Fan | Speed: {:.1} RPM | Power: {} | Oscillate: {} | Lighting: {} | FPS: {:.1}",
                self.fan.archetype().label(),
                self.fan.current_speed(),
                if self.fan.is_on() { "on" } else { "off" },
                if self.fan.oscillating() { "on" } else { "off" },
                self.fan.lighting_mode().label(),
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
