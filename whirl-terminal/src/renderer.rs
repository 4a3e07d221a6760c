/// ASCII rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use whirl_core::{Camera, RenderBatch, RenderFrame, Rgba};

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// ASCII renderer that converts shaded face batches to terminal cells
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; size],
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    pub fn clear(&mut self) {
        for i in 0..self.depth_buffer.len() {
            self.depth_buffer[i] = f32::INFINITY;
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = Color::Reset;
        }
    }

    /// Rasterize every batch of a rendered frame
    pub fn render_frame(&mut self, frame: &RenderFrame, camera: &Camera) {
        for batch in &frame.batches {
            self.render_batch(batch, camera);
        }
    }

    fn render_batch(&mut self, batch: &RenderBatch, camera: &Camera) {
        for (face, color) in batch.faces.iter().zip(batch.face_colors.iter()) {
            // Faces touching the clip bounds are dropped whole
            let screen: Option<Vec<_>> = face
                .iter()
                .map(|&index| {
                    camera.project_to_screen(
                        &batch.vertices[index],
                        self.width as u32,
                        self.height as u32,
                    )
                })
                .collect();
            let Some(screen) = screen else { continue };

            match batch.edge_color {
                // Wireframe batches draw their face outlines only
                Some(edge) => self.outline_face(&screen, &edge),
                None => self.fill_face(&screen, color),
            }
        }
    }

    /// Fill a convex polygon by fan triangulation from its first vertex
    fn fill_face(&mut self, screen: &[(f32, f32, f32)], color: &Rgba) {
        let (character, cell_color) = cell_style(color);
        for i in 1..screen.len().saturating_sub(1) {
            self.rasterize_triangle(
                &[screen[0], screen[i], screen[i + 1]],
                character,
                cell_color,
            );
        }
    }

    /// Draw the closed outline of a polygon
    fn outline_face(&mut self, screen: &[(f32, f32, f32)], color: &Rgba) {
        let (character, cell_color) = cell_style(color);
        for i in 0..screen.len() {
            let a = screen[i];
            let b = screen[(i + 1) % screen.len()];
            self.draw_line(a, b, character, cell_color);
        }
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], character: char, color: Color) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i32;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i32;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i32;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i32;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i32 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i32 - 1);

        // Scanline rasterization
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;

                // Barycentric coordinates
                if let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;
                        self.plot(x as usize, y as usize, depth, character, color);
                    }
                }
            }
        }
    }

    /// Depth-tested line between two projected points
    fn draw_line(
        &mut self,
        a: (f32, f32, f32),
        b: (f32, f32, f32),
        character: char,
        color: Color,
    ) {
        let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs()).ceil().max(1.0) as usize;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let x = a.0 + (b.0 - a.0) * t;
            let y = a.1 + (b.1 - a.1) * t;
            let depth = a.2 + (b.2 - a.2) * t;

            if x >= 0.0 && y >= 0.0 && (x as usize) < self.width && (y as usize) < self.height {
                self.plot(x as usize, y as usize, depth, character, color);
            }
        }
    }

    fn plot(&mut self, x: usize, y: usize, depth: f32, character: char, color: Color) {
        let idx = y * self.width + x;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            self.char_buffer[idx] = character;
            self.color_buffer[idx] = color;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            // Raw mode: position each row explicitly
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Map a shaded face color to a ramp character and an ANSI color.
///
/// The character tracks perceptual luminance scaled by alpha, so
/// translucent parts read dimmer even on terminals without true color.
fn cell_style(color: &Rgba) -> (char, Color) {
    let luminance = (0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b) * color.a;
    let index = (luminance.clamp(0.0, 1.0) * (LUMINOSITY_RAMP.len() - 1) as f32) as usize;
    let character = LUMINOSITY_RAMP[index.min(LUMINOSITY_RAMP.len() - 1)];

    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
    let cell_color = Color::Rgb {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    };
    (character, cell_color)
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f32, f32),
    v1: (f32, f32),
    v2: (f32, f32),
    p: (f32, f32),
) -> Option<(f32, f32, f32)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
