//! Chart color palettes.

use rand::Rng;

/// Brand palette, used in order before any generated colors.
pub const PALETTE: [&str; 10] = [
    "#3B82F6", // primary blue
    "#6366F1", // indigo
    "#10B981", // success green
    "#F59E0B", // warning amber
    "#EF4444", // error red
    "#8B5CF6", // purple
    "#06B6D4", // cyan
    "#F97316", // orange
    "#84CC16", // lime
    "#EC4899", // pink
];

/// `count` chart colors using the thread-local RNG for any past the palette.
pub fn generate_colors(count: usize) -> Vec<String> {
    generate_colors_with(count, &mut rand::rng())
}

/// `count` chart colors: the fixed palette first, then random `hsl()` colors
/// with saturation in 60–79% and lightness in 50–69%.
pub fn generate_colors_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    let mut colors: Vec<String> = PALETTE.iter().take(count).map(|c| c.to_string()).collect();
    while colors.len() < count {
        let hue: u32 = rng.random_range(0..360);
        let saturation: u32 = rng.random_range(60..80);
        let lightness: u32 = rng.random_range(50..70);
        colors.push(format!("hsl({hue}, {saturation}%, {lightness}%)"));
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_palette_prefix() {
        assert!(generate_colors(0).is_empty());
        assert_eq!(generate_colors(3), vec!["#3B82F6", "#6366F1", "#10B981"]);
        assert_eq!(generate_colors(10), PALETTE.to_vec());
    }

    #[test]
    fn test_generated_colors_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let colors = generate_colors_with(25, &mut rng);
        assert_eq!(colors.len(), 25);
        assert_eq!(&colors[..10], &PALETTE.map(String::from)[..]);
        for color in &colors[10..] {
            let inner = color
                .strip_prefix("hsl(")
                .and_then(|c| c.strip_suffix(')'))
                .unwrap();
            let parts: Vec<u32> = inner
                .split(", ")
                .map(|p| p.trim_end_matches('%').parse().unwrap())
                .collect();
            assert!(parts[0] < 360);
            assert!((60..80).contains(&parts[1]));
            assert!((50..70).contains(&parts[2]));
        }
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let a = generate_colors_with(12, &mut StdRng::seed_from_u64(7));
        let b = generate_colors_with(12, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
