/// Per-frame update and draw, driven by the host's frame callback
use log::{debug, trace};

use crate::clock::FrameClock;
use crate::scene::Scene;
use crate::surface::{resize_to_display_size, Renderer};

/// What one frame did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Seconds since the first frame, applied as every object's rotation
    pub elapsed: f32,
    /// Whether the backing resolution changed this frame
    pub resized: bool,
}

/// Application context: the scene plus the clock that animates it.
///
/// The host calls [`RenderLoop::frame`] once per display frame and is
/// responsible for scheduling the next call.
pub struct RenderLoop<C> {
    pub scene: Scene,
    clock: C,
    frames: u64,
}

impl<C: FrameClock> RenderLoop<C> {
    pub fn new(scene: Scene, clock: C) -> Self {
        Self {
            scene,
            clock,
            frames: 0,
        }
    }

    /// Run one frame at the clock's current time
    pub fn frame<R: Renderer>(&mut self, renderer: &mut R) -> Result<FrameReport, R::Error> {
        let elapsed = self.clock.elapsed();
        self.frame_at(renderer, elapsed)
    }

    /// Run one frame at an explicit elapsed time in seconds
    pub fn frame_at<R: Renderer>(
        &mut self,
        renderer: &mut R,
        elapsed: f32,
    ) -> Result<FrameReport, R::Error> {
        let resized = resize_to_display_size(renderer);
        if resized {
            let (width, height) = renderer.backing_size();
            debug!("surface resized to {width}x{height}");
            self.scene.camera.set_aspect(renderer.aspect());
        }

        self.scene.spin(elapsed);

        // Aspect follows the displayed size every frame, resize or not
        self.scene.camera.set_aspect(renderer.aspect());

        renderer.draw(&self.scene)?;

        self.frames += 1;
        trace!("frame {} at {elapsed:.3}s", self.frames);

        Ok(FrameReport { elapsed, resized })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
