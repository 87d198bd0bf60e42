/// Output surfaces and the renderers that draw on them
use crate::scene::Scene;

/// Something with a displayed size and a separately sized backing buffer,
/// like a canvas or a terminal window
pub trait Surface {
    /// Size the host currently displays the surface at
    fn display_size(&self) -> (u32, u32);

    /// Resolution of the buffer actually drawn into
    fn backing_size(&self) -> (u32, u32);

    fn set_backing_size(&mut self, width: u32, height: u32);

    /// Width over height of one displayed frame
    fn aspect(&self) -> f32 {
        let (width, height) = self.display_size();
        width as f32 / height as f32
    }
}

/// A surface that can draw a scene
pub trait Renderer: Surface {
    type Error;

    fn draw(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}

/// Match the backing resolution to the displayed size.
///
/// Returns `true` when a resize happened; calling it again without the
/// display changing does nothing.
pub fn resize_to_display_size<S: Surface + ?Sized>(surface: &mut S) -> bool {
    let display = surface.display_size();
    let needs_resize = surface.backing_size() != display;
    if needs_resize {
        surface.set_backing_size(display.0, display.1);
    }
    needs_resize
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSurface {
        display: (u32, u32),
        backing: (u32, u32),
        resizes: u32,
    }

    impl Surface for FakeSurface {
        fn display_size(&self) -> (u32, u32) {
            self.display
        }

        fn backing_size(&self) -> (u32, u32) {
            self.backing
        }

        fn set_backing_size(&mut self, width: u32, height: u32) {
            self.backing = (width, height);
            self.resizes += 1;
        }
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut surface = FakeSurface {
            display: (640, 480),
            backing: (300, 150),
            resizes: 0,
        };

        assert!(resize_to_display_size(&mut surface));
        assert_eq!(surface.backing, (640, 480));
        assert!(!resize_to_display_size(&mut surface));
        assert_eq!(surface.resizes, 1);

        surface.display = (1024, 768);
        assert!(resize_to_display_size(&mut surface));
        assert_eq!(surface.resizes, 2);
    }

    #[test]
    fn test_default_aspect() {
        let surface = FakeSurface {
            display: (800, 400),
            backing: (0, 0),
            resizes: 0,
        };
        assert_eq!(surface.aspect(), 2.0);
    }
}
