use heatmap_core::{CellLevel, Ramp, Rgb, EMPTY_CELL_COLOR};

/// Background color of one heatmap cell.
pub fn cell_color(level: CellLevel, ramp: Ramp) -> String {
    match level {
        CellLevel::Empty => EMPTY_CELL_COLOR.to_string(),
        CellLevel::Level(t) => ramp.sample(t).to_hex(),
    }
}

/// Parse `#rrggbb` back into an RGB triple (used for terminal output).
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
