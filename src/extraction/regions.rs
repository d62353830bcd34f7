use image::{GrayImage, Luma};
use imageproc::point::Point;
use imageproc::region_labelling::{connected_components, Connectivity};
use std::collections::BTreeMap;

use crate::models::Region;

/// Find connected ink regions in a binary image.
///
/// Labels 8-connected foreground components and folds each label into a
/// [`Region`] carrying its bounding box, pixel count and pixel
/// coordinates. Holes inside a component are background and are not
/// reported separately.
pub fn find_regions(binary: &GrayImage) -> Vec<Region> {
    let labeled = connected_components(binary, Connectivity::Eight, Luma([0u8]));

    let mut regions: BTreeMap<u32, Region> = BTreeMap::new();

    for (x, y, label) in labeled.enumerate_pixels() {
        let label_val = label[0];
        if label_val == 0 {
            continue; // Skip background
        }

        regions
            .entry(label_val)
            .and_modify(|r| {
                r.min_x = r.min_x.min(x);
                r.min_y = r.min_y.min(y);
                r.max_x = r.max_x.max(x);
                r.max_y = r.max_y.max(y);
                r.pixel_count += 1;
                r.points.push(Point::new(x as i32, y as i32));
            })
            .or_insert_with(|| Region {
                label: label_val,
                min_x: x,
                min_y: y,
                max_x: x,
                max_y: y,
                pixel_count: 1,
                points: vec![Point::new(x as i32, y as i32)],
            });
    }

    regions.into_values().collect()
}
