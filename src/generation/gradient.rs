//! Gradients interpolated in HSL space

use crate::color::{hex_to_hsl, hex_to_rgb, Hsl, Rgb};

fn endpoint(color: &str) -> Hsl {
    hex_to_hsl(color).unwrap_or_else(|| {
        tracing::debug!(color, "unparseable gradient endpoint, using black");
        Hsl::default()
    })
}

/// `steps` colors from `color_a` to `color_b`, both ends included
///
/// The ends are the input colors in canonical form; only the interior
/// points are interpolated. Hue, saturation and lightness move
/// independently, and hue takes the direct numeric path, not the shorter
/// way around the wheel. `steps <= 1` yields just `color_a` (in canonical
/// form when it parses), and equal endpoints yield `steps` copies.
pub fn color_gradient(color_a: &str, color_b: &str, steps: usize) -> Vec<String> {
    let rgb_a = hex_to_rgb(color_a);
    let rgb_b = hex_to_rgb(color_b);

    if steps <= 1 {
        let first = rgb_a.map_or_else(|| color_a.to_string(), Rgb::to_hex);
        return vec![first];
    }
    if let (Some(a), Some(b)) = (rgb_a, rgb_b) {
        if a == b {
            return vec![a.to_hex(); steps];
        }
    }

    let start = endpoint(color_a);
    let end = endpoint(color_b);
    let last = steps - 1;

    (0..steps)
        .map(|i| match (i, rgb_a, rgb_b) {
            (0, Some(a), _) => a.to_hex(),
            (i, _, Some(b)) if i == last => b.to_hex(),
            _ => {
                let progress = i as f64 / last as f64;
                Hsl::new(
                    start.h + (end.h - start.h) * progress,
                    start.s + (end.s - start.s) * progress,
                    start.l + (end.l - start.l) * progress,
                )
                .to_hex()
            }
        })
        .collect()
}

/// Chain gradients through consecutive colors, without repeating the
/// color shared by adjacent segments
///
/// Fewer than two colors are returned unchanged. Each segment has at
/// least two steps.
pub fn multi_gradient_palette<S: AsRef<str>>(colors: &[S], steps_per_segment: usize) -> Vec<String> {
    if colors.len() < 2 {
        return colors.iter().map(|c| c.as_ref().to_string()).collect();
    }

    let steps = steps_per_segment.max(2);
    let mut palette = Vec::with_capacity((colors.len() - 1) * (steps - 1) + 1);

    for (i, pair) in colors.windows(2).enumerate() {
        let segment = color_gradient(pair[0].as_ref(), pair[1].as_ref(), steps);
        let skip = usize::from(i > 0);
        palette.extend(segment.into_iter().skip(skip));
    }
    palette
}
