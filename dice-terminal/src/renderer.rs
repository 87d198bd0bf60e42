/// ASCII rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};
use dice_core::{Color, Material, Renderer, Scene, Surface, Transform, Triangle};
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use std::io::{self, Write};

/// Character luminosity ramp for depth/shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Width over height of one terminal cell
const CELL_ASPECT: f32 = 0.5;

/// One rasterized character cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub character: char,
    pub color: Color,
}

impl Cell {
    const EMPTY: Cell = Cell {
        character: ' ',
        color: Color::BLACK,
    };
}

/// Per-object state shared by all of its triangles
struct ObjectPass<'a> {
    model: Matrix4<f32>,
    normal_matrix: Matrix3<f32>,
    mvp: Matrix4<f32>,
    material: &'a Material,
}

/// ASCII renderer that converts 3D meshes to terminal characters
pub struct AsciiRenderer<W: Write> {
    writer: W,
    width: usize,
    height: usize,
    display: (u32, u32),
    depth_buffer: Vec<f32>,
    cells: Vec<Cell>,
    status: Option<String>,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(writer: W, width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            writer,
            width,
            height,
            display: (width as u32, height as u32),
            depth_buffer: vec![f32::INFINITY; size],
            cells: vec![Cell::EMPTY; size],
            status: None,
        }
    }

    /// Record the terminal's current size in cells
    pub fn set_display_size(&mut self, columns: u16, rows: u16) {
        self.display = (columns as u32, rows as u32);
    }

    /// Text drawn over the top row after each frame
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.cells.fill(Cell::EMPTY);
    }

    pub fn render_scene(&mut self, scene: &Scene) {
        let view = scene.camera.view_matrix();
        let projection = scene.camera.projection_matrix();

        for object in &scene.objects {
            let model = object.model_matrix();
            let pass = ObjectPass {
                normal_matrix: Transform::normal_matrix(&model),
                mvp: Transform::mvp_matrix(&model, &view, projection),
                model,
                material: &object.material,
            };
            for triangle in &object.mesh.triangles {
                self.render_triangle(triangle, &pass, scene);
            }
        }
    }

    fn render_triangle(&mut self, triangle: &Triangle, pass: &ObjectPass<'_>, scene: &Scene) {
        let world = triangle
            .vertices
            .map(|vertex| pass.model.transform_point(&vertex.position));

        let normal = pass.normal_matrix * triangle.vertices[0].normal;
        let Some(normal) = normal.try_normalize(f32::EPSILON) else {
            return;
        };

        // Back faces point away from the camera
        let to_camera = scene.camera.position - world[0];
        if normal.dot(&to_camera) <= 0.0 {
            return;
        }

        // Project vertices to screen space
        let mut screen_coords = [(0.0, 0.0, 0.0); 3];
        for (coords, vertex) in screen_coords.iter_mut().zip(&triangle.vertices) {
            match scene.camera.project_to_screen(
                &vertex.position,
                &pass.mvp,
                self.width as u32,
                self.height as u32,
            ) {
                Some(projected) => *coords = projected,
                None => return, // Triangle is clipped
            }
        }

        let cell = shade(&normal, &world, pass.material, scene);
        self.rasterize_triangle(&screen_coords, cell);
    }

    fn rasterize_triangle(&mut self, coords: &[(f32, f32, f32); 3], cell: Cell) {
        let [v0, v1, v2] = *coords;

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
                if let Some((w0, w1, w2)) = barycentric(
                    (v0.0, v0.1),
                    (v1.0, v1.1),
                    (v2.0, v2.1),
                    (px, py),
                ) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        // Interpolate depth
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width + x as usize;
                        if depth < self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.cells[idx] = cell;
                        }
                    }
                }
            }
        }
    }

    /// Write the cell buffer to the terminal, one row at a time
    pub fn present(&mut self, background: Color) -> io::Result<()> {
        let [r, g, b] = background.to_rgb8();
        self.writer.queue(SetBackgroundColor(TermColor::Rgb { r, g, b }))?;

        let mut current = None;
        for y in 0..self.height {
            self.writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                let [r, g, b] = cell.color.to_rgb8();
                if current != Some([r, g, b]) {
                    self.writer.queue(SetForegroundColor(TermColor::Rgb { r, g, b }))?;
                    current = Some([r, g, b]);
                }
                self.writer.queue(Print(cell.character))?;
            }
        }

        if let Some(status) = &self.status {
            let visible: String = status.chars().take(self.width).collect();
            self.writer.queue(cursor::MoveTo(0, 0))?;
            self.writer.queue(SetForegroundColor(TermColor::Yellow))?;
            self.writer.queue(Print(visible))?;
        }

        self.writer.queue(ResetColor)?;
        self.writer.flush()
    }
}

impl<W: Write> Surface for AsciiRenderer<W> {
    fn display_size(&self) -> (u32, u32) {
        self.display
    }

    fn backing_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        let size = width as usize * height as usize;
        self.width = width as usize;
        self.height = height as usize;
        self.depth_buffer = vec![f32::INFINITY; size];
        self.cells = vec![Cell::EMPTY; size];
    }

    /// Cells are about twice as tall as they are wide
    fn aspect(&self) -> f32 {
        let (columns, rows) = self.display;
        columns as f32 * CELL_ASPECT / rows as f32
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    type Error = io::Error;

    fn draw(&mut self, scene: &Scene) -> io::Result<()> {
        self.clear();
        self.render_scene(scene);
        self.present(scene.background)
    }
}

/// Blinn-Phong shading of one flat face under the scene's directional light
fn shade(normal: &Vector3<f32>, world: &[Point3<f32>; 3], material: &Material, scene: &Scene) -> Cell {
    let light = &scene.light;
    let diffuse = light.diffuse(normal);

    let centroid = Point3::from((world[0].coords + world[1].coords + world[2].coords) / 3.0);
    let to_eye = (scene.camera.position - centroid).normalize();
    let half = (light.direction() + to_eye).normalize();
    let specular = if diffuse > 0.0 {
        normal.dot(&half).max(0.0).powf(material.shininess) * light.intensity
    } else {
        0.0
    };

    let lit = material.color.scale(diffuse);
    let shine = material.specular.scale(specular);
    let color = Color::new(
        (lit.r + shine.r) * light.color.r,
        (lit.g + shine.g) * light.color.g,
        (lit.b + shine.b) * light.color.b,
    );

    // Map brightness to character
    let brightness = diffuse.clamp(0.0, 1.0);
    let char_index = (brightness * (LUMINOSITY_RAMP.len() - 1) as f32).round() as usize;
    let char_index = char_index.min(LUMINOSITY_RAMP.len() - 1);

    Cell {
        character: LUMINOSITY_RAMP[char_index],
        color,
    }
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
