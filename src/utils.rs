use bytemuck::NoUninit;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Debug, Clone, Copy, NoUninit)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
}

pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

#[derive(Debug, Clone)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn upload(&self, device: &wgpu::Device) -> MeshBuffer {
        let vertices = bytemuck::cast_slice(&self.vertices);
        let indices = bytemuck::cast_slice(&self.indices);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: vertices,
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: indices,
            usage: wgpu::BufferUsages::INDEX,
        });

        MeshBuffer {
            vertex_buffer,
            index_buffer,
            index_count: self.indices.len() as u32,
        }
    }
}

/// Quad covering the screenshot at the world origin, one world unit per
/// screenshot pixel.
pub fn create_screen_quad(width: u32, height: u32) -> Mesh {
    let w = width as f32;
    let h = height as f32;

    let vertices = vec![
        Vertex { pos: [0.0, 0.0], uv: [0.0, 0.0] },
        Vertex { pos: [w, 0.0], uv: [1.0, 0.0] },
        Vertex { pos: [w, h], uv: [1.0, 1.0] },
        Vertex { pos: [0.0, h], uv: [0.0, 1.0] },
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_quad_spans_image() {
        let mesh = create_screen_quad(1920, 1080);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6, "two triangles");
        assert_eq!(mesh.vertices[0].pos, [0.0, 0.0]);
        assert_eq!(mesh.vertices[2].pos, [1920.0, 1080.0]);

        // Texture coordinates track the corners
        assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
        assert_eq!(mesh.vertices[2].uv, [1.0, 1.0]);
    }
}
