use dice_core::{
    DieKind, HostClock, RenderLoop, Renderer, Scene, SceneConfig, Surface, LAYOUT,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Headless renderer that counts draws and remembers the last aspect it saw
struct HeadlessRenderer {
    display: (u32, u32),
    backing: (u32, u32),
    draws: usize,
    last_aspect: f32,
}

impl HeadlessRenderer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            display: (width, height),
            backing: (300, 150),
            draws: 0,
            last_aspect: 0.0,
        }
    }
}

impl Surface for HeadlessRenderer {
    fn display_size(&self) -> (u32, u32) {
        self.display
    }

    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
    }
}

impl Renderer for HeadlessRenderer {
    type Error = std::convert::Infallible;

    fn draw(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        self.draws += 1;
        self.last_aspect = scene.camera.aspect;
        Ok(())
    }
}

fn assembled() -> Scene {
    let mut rng = StdRng::seed_from_u64(2022);
    Scene::assemble(&SceneConfig::default(), &mut rng).unwrap()
}

#[test]
fn test_end_to_end_synthetic_five_seconds() {
    let scene = assembled();
    assert_eq!(scene.objects.len(), 9);

    let mut render_loop = RenderLoop::new(scene, HostClock::new());
    let mut renderer = HeadlessRenderer::new(1280, 720);

    let report = render_loop.frame_at(&mut renderer, 5.0).unwrap();
    assert!(report.resized);
    assert_eq!(renderer.draws, 1);
    assert_eq!(renderer.backing, (1280, 720));
    assert!((renderer.last_aspect - 1280.0 / 720.0).abs() < 1e-6);

    for object in &render_loop.scene.objects {
        assert_eq!(object.rotation.x, 5.0);
        assert_eq!(object.rotation.y, 5.0);
    }
}

#[test]
fn test_host_clock_drives_rotation() {
    let mut render_loop = RenderLoop::new(assembled(), HostClock::new());
    let mut renderer = HeadlessRenderer::new(640, 480);

    // requestAnimationFrame-style timestamps, starting mid-session
    for (timestamp, expected) in [(1_000.0, 0.0), (1_016.0, 0.016), (3_500.0, 2.5)] {
        render_loop.clock_mut().observe(timestamp);
        let report = render_loop.frame(&mut renderer).unwrap();
        assert!((report.elapsed - expected).abs() < 1e-5);
        for object in &render_loop.scene.objects {
            assert_eq!(object.rotation.x, report.elapsed);
            assert_eq!(object.rotation.y, report.elapsed);
        }
    }
    assert_eq!(render_loop.frames(), 3);
}

#[test]
fn test_every_object_is_valid_and_placed() {
    let scene = assembled();
    for (object, (kind, slot)) in scene.objects.iter().zip(LAYOUT) {
        assert_eq!(object.kind, kind);
        assert_eq!(object.slot, slot);
        assert!(object.geometry.validate().is_ok());
        assert_eq!(object.position.x, slot.x as f32 * 15.0);
        assert_eq!(object.position.y, slot.y as f32 * 15.0);
        assert_eq!(object.position.z, 0.0);
    }

    let d10s = scene
        .objects
        .iter()
        .filter(|o| o.kind == DieKind::D10)
        .count();
    assert_eq!(d10s, 2);
}

#[test]
fn test_hues_differ_between_objects() {
    let scene = assembled();
    let mut hues: Vec<f32> = scene.objects.iter().map(|o| o.material.hue).collect();
    hues.sort_by(|a, b| a.partial_cmp(b).unwrap());
    hues.dedup();
    assert_eq!(hues.len(), 9);
    assert!(hues.iter().all(|h| (0.0..1.0).contains(h)));
}
