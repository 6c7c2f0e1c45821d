use crate::mesh::Vertex;

/// Consumer of a finished frame batch
///
/// Implementations upload the buffers and issue one indexed triangle-list
/// draw. The buffers are only valid for the duration of the call; the
/// batch is cleared as soon as `draw` returns.
pub trait FrameSink {
    fn draw(&mut self, vertices: &[Vertex], indices: &[u32]);
}
