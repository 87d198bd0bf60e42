/// WebGL2 renderer drawing the dice scene on a canvas
use dice_core::{Mesh, Renderer, Scene, Surface, Transform};
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as Gl, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::WebError;

const VERTEX_SHADER: &str = r#"#version 300 es
in vec3 a_position;
in vec3 a_normal;

uniform mat4 u_model;
uniform mat4 u_view_projection;
uniform mat3 u_normal_matrix;

out vec3 v_normal;
out vec3 v_world;

void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    v_world = world.xyz;
    v_normal = u_normal_matrix * a_normal;
    gl_Position = u_view_projection * world;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;

in vec3 v_normal;
in vec3 v_world;

uniform vec3 u_color;
uniform vec3 u_specular;
uniform float u_shininess;
uniform vec3 u_light_direction;
uniform vec3 u_light_color;
uniform vec3 u_camera_position;

out vec4 out_color;

void main() {
    vec3 n = normalize(v_normal);
    vec3 l = normalize(u_light_direction);
    float diffuse = max(dot(n, l), 0.0);

    vec3 v = normalize(u_camera_position - v_world);
    vec3 h = normalize(l + v);
    float specular = diffuse > 0.0 ? pow(max(dot(n, h), 0.0), u_shininess) : 0.0;

    out_color = vec4((u_color * diffuse + u_specular * specular) * u_light_color, 1.0);
}
"#;

/// Floats per vertex: position then normal
const VERTEX_STRIDE: usize = 6;

/// Interleave a flat-shaded mesh as `[px, py, pz, nx, ny, nz]` per vertex
pub fn interleave(mesh: &Mesh) -> Vec<f32> {
    let mut data = Vec::with_capacity(mesh.triangles.len() * 3 * VERTEX_STRIDE);
    for triangle in &mesh.triangles {
        for vertex in &triangle.vertices {
            data.extend_from_slice(vertex.position.coords.as_slice());
            data.extend_from_slice(vertex.normal.as_slice());
        }
    }
    data
}

struct Uniforms {
    model: Option<WebGlUniformLocation>,
    view_projection: Option<WebGlUniformLocation>,
    normal_matrix: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    specular: Option<WebGlUniformLocation>,
    shininess: Option<WebGlUniformLocation>,
    light_direction: Option<WebGlUniformLocation>,
    light_color: Option<WebGlUniformLocation>,
    camera_position: Option<WebGlUniformLocation>,
}

impl Uniforms {
    fn locate(gl: &Gl, program: &WebGlProgram) -> Self {
        let at = |name: &str| gl.get_uniform_location(program, name);
        Self {
            model: at("u_model"),
            view_projection: at("u_view_projection"),
            normal_matrix: at("u_normal_matrix"),
            color: at("u_color"),
            specular: at("u_specular"),
            shininess: at("u_shininess"),
            light_direction: at("u_light_direction"),
            light_color: at("u_light_color"),
            camera_position: at("u_camera_position"),
        }
    }
}

/// One object's vertices on the GPU
struct GpuMesh {
    vao: WebGlVertexArrayObject,
    // Owned so the buffer lives as long as the VAO that reads it
    _buffer: WebGlBuffer,
    vertex_count: i32,
}

pub struct WebGlRenderer {
    canvas: HtmlCanvasElement,
    gl: Gl,
    program: WebGlProgram,
    uniforms: Uniforms,
    meshes: Vec<GpuMesh>,
}

impl WebGlRenderer {
    /// Compile the shaders and upload every object's mesh, in scene order
    pub fn new(canvas: HtmlCanvasElement, scene: &Scene) -> Result<Self, WebError> {
        let gl = canvas
            .get_context("webgl2")?
            .ok_or(WebError::ContextUnavailable)?
            .dyn_into::<Gl>()
            .map_err(|_| WebError::ContextUnavailable)?;

        let vertex = compile_shader(&gl, Gl::VERTEX_SHADER, VERTEX_SHADER)?;
        let fragment = compile_shader(&gl, Gl::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vertex, &fragment)?;
        let uniforms = Uniforms::locate(&gl, &program);

        let position = attribute_index("a_position", gl.get_attrib_location(&program, "a_position"))?;
        let normal = attribute_index("a_normal", gl.get_attrib_location(&program, "a_normal"))?;

        let meshes = scene
            .objects
            .iter()
            .map(|object| upload_mesh(&gl, &object.mesh, position, normal))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("uploaded {} meshes", meshes.len());

        gl.enable(Gl::DEPTH_TEST);
        gl.enable(Gl::CULL_FACE);

        Ok(Self {
            canvas,
            gl,
            program,
            uniforms,
            meshes,
        })
    }
}

impl Surface for WebGlRenderer {
    fn display_size(&self) -> (u32, u32) {
        (
            self.canvas.client_width().max(0) as u32,
            self.canvas.client_height().max(0) as u32,
        )
    }

    fn backing_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    /// Resize the drawing buffer only; the canvas's CSS size is left alone
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Renderer for WebGlRenderer {
    type Error = WebError;

    fn draw(&mut self, scene: &Scene) -> Result<(), WebError> {
        let gl = &self.gl;
        let (width, height) = self.backing_size();
        gl.viewport(0, 0, width as i32, height as i32);

        let background = scene.background;
        gl.clear_color(background.r, background.g, background.b, 1.0);
        gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);

        gl.use_program(Some(&self.program));

        let u = &self.uniforms;
        let view_projection = scene.camera.view_projection();
        gl.uniform_matrix4fv_with_f32_array(u.view_projection.as_ref(), false, view_projection.as_slice());
        gl.uniform3fv_with_f32_array(
            u.light_direction.as_ref(),
            scene.light.direction().as_slice(),
        );
        gl.uniform3fv_with_f32_array(
            u.light_color.as_ref(),
            &scene.light.color.scale(scene.light.intensity).to_array(),
        );
        gl.uniform3fv_with_f32_array(
            u.camera_position.as_ref(),
            scene.camera.position.coords.as_slice(),
        );

        for (object, mesh) in scene.objects.iter().zip(&self.meshes) {
            let model = object.model_matrix();
            let normal_matrix = Transform::normal_matrix(&model);

            gl.uniform_matrix4fv_with_f32_array(u.model.as_ref(), false, model.as_slice());
            gl.uniform_matrix3fv_with_f32_array(u.normal_matrix.as_ref(), false, normal_matrix.as_slice());
            gl.uniform3fv_with_f32_array(u.color.as_ref(), &object.material.color.to_array());
            gl.uniform3fv_with_f32_array(u.specular.as_ref(), &object.material.specular.to_array());
            gl.uniform1f(u.shininess.as_ref(), object.material.shininess);

            gl.bind_vertex_array(Some(&mesh.vao));
            gl.draw_arrays(Gl::TRIANGLES, 0, mesh.vertex_count);
        }
        gl.bind_vertex_array(None);

        Ok(())
    }
}

fn compile_shader(gl: &Gl, kind: u32, source: &str) -> Result<WebGlShader, WebError> {
    let shader = gl.create_shader(kind).ok_or(WebError::Resource("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let info_log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(WebError::Shader(info_log))
    }
}

fn link_program(gl: &Gl, vertex: &WebGlShader, fragment: &WebGlShader) -> Result<WebGlProgram, WebError> {
    let program = gl.create_program().ok_or(WebError::Resource("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    if gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let info_log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(WebError::Link(info_log))
    }
}

/// WebGL reports a missing attribute as -1
fn attribute_index(name: &'static str, location: i32) -> Result<u32, WebError> {
    u32::try_from(location).map_err(|_| WebError::MissingAttribute(name))
}

fn upload_mesh(gl: &Gl, mesh: &Mesh, position: u32, normal: u32) -> Result<GpuMesh, WebError> {
    let data = interleave(mesh);

    let vao = gl
        .create_vertex_array()
        .ok_or(WebError::Resource("vertex array"))?;
    gl.bind_vertex_array(Some(&vao));

    let buffer = gl.create_buffer().ok_or(WebError::Resource("buffer"))?;
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_u8_array(Gl::ARRAY_BUFFER, bytemuck::cast_slice(data.as_slice()), Gl::STATIC_DRAW);

    let stride = (VERTEX_STRIDE * std::mem::size_of::<f32>()) as i32;
    gl.enable_vertex_attrib_array(position);
    gl.vertex_attrib_pointer_with_i32(position, 3, Gl::FLOAT, false, stride, 0);
    gl.enable_vertex_attrib_array(normal);
    gl.vertex_attrib_pointer_with_i32(normal, 3, Gl::FLOAT, false, stride, 12);

    gl.bind_vertex_array(None);

    Ok(GpuMesh {
        vao,
        _buffer: buffer,
        vertex_count: (data.len() / VERTEX_STRIDE) as i32,
    })
}
