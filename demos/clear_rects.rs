use std::mem;

use ash::vk;
use vk_geometry::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!(
        "Layout: Rect2d {} bytes, Rect3d {} bytes, ClearRect {} bytes",
        mem::size_of::<Rect2d>(),
        mem::size_of::<Rect3d>(),
        mem::size_of::<ClearRect>(),
    );

    let area = Rect2d::from(Extent2d::new(1280, 720));

    let rects = [
        ClearRect::new(area, 0, 1),
        ClearRect::new(Rect2d::from_coords(16, 16, 256, 128), 1, 2),
        ClearRect::new(Rect2d::from_coords(0, 0, 0, 64), 0, 1),
    ];

    for rect in &rects {
        match rect.validate() {
            Ok(()) => tracing::info!(
                "Clear {} layers {}+{}",
                rect.rect,
                rect.base_array_layer,
                rect.layer_count,
            ),
            Err(err) => tracing::warn!("Invalid clear rect:\n{:?}", err),
        }
    }

    let raw: &[vk::ClearRect] = ClearRect::as_raw_slice(&rects);

    for rect in raw {
        tracing::info!("  {:?}", rect);
    }
}
