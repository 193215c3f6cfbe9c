#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AvatarColor {
    pub name: &'static str,
    /// `#rrggbb` literal.
    pub hex: &'static str,
}

impl AvatarColor {
    /// Channels scaled to 0.0..=1.0, for toolkits that build colors from floats.
    pub fn rgb(&self) -> (f32, f32, f32) {
        let channel = |i: usize| {
            self.hex
                .get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(0) as f32
                / 255.0
        };
        (channel(1), channel(3), channel(5))
    }
}

/// Order is part of the contract: stored names map to the same entry forever.
pub const PALETTE: [AvatarColor; 8] = [
    AvatarColor { name: "blue", hex: "#1976d2" },
    AvatarColor { name: "green", hex: "#388e3c" },
    AvatarColor { name: "red", hex: "#d32f2f" },
    AvatarColor { name: "orange", hex: "#f57c00" },
    AvatarColor { name: "purple", hex: "#7b1fa2" },
    AvatarColor { name: "cyan", hex: "#0097a7" },
    AvatarColor { name: "pink", hex: "#c2185b" },
    AvatarColor { name: "brown", hex: "#5d4037" },
];

/// Background color for a placeholder avatar. Same name, same color.
pub fn avatar_color(name: Option<&str>) -> &'static str {
    palette_entry(name).hex
}

pub fn palette_entry(name: Option<&str>) -> &'static AvatarColor {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => return &PALETTE[0],
    };
    let idx = code_unit_sum(name) as usize % PALETTE.len();
    &PALETTE[idx]
}

// Wrapping keeps `sum % 8` exact since 2^32 is a multiple of 8.
fn code_unit_sum(name: &str) -> u32 {
    name.encode_utf16()
        .fold(0u32, |sum, unit| sum.wrapping_add(u32::from(unit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_name_uses_first_entry() {
        assert_eq!(avatar_color(None), "#1976d2");
        assert_eq!(avatar_color(Some("")), "#1976d2");
    }

    #[test]
    fn index_is_code_unit_sum_mod_eight() {
        // 'A' = 65 -> 1
        assert_eq!(avatar_color(Some("A")), "#388e3c");
        // 'J'+'a'+'n'+'e' = 74+97+110+101 = 382 -> 6
        assert_eq!(avatar_color(Some("Jane")), "#c2185b");
        // 'H' = 72 -> 0
        assert_eq!(avatar_color(Some("H")), "#1976d2");
    }

    #[test]
    fn case_sensitive() {
        // 'a' = 97 -> 1, 'b' = 98 -> 2
        assert_eq!(avatar_color(Some("a")), PALETTE[1].hex);
        assert_eq!(avatar_color(Some("b")), PALETTE[2].hex);
        // 'B' = 66 -> 2, 'C' = 67 -> 3
        assert_ne!(avatar_color(Some("B")), avatar_color(Some("C")));
    }

    #[test]
    fn sums_utf16_code_units() {
        // U+1F600 is the surrogate pair 0xD83D 0xDE00; sum = 0x1B63D -> 5
        assert_eq!(code_unit_sum("\u{1F600}"), 0xD83D + 0xDE00);
        assert_eq!(avatar_color(Some("\u{1F600}")), PALETTE[5].hex);
    }

    #[test]
    fn rgb_channels() {
        let (r, g, b) = PALETTE[5].rgb();
        assert_eq!(r, 0.0);
        assert!((g - 0x97 as f32 / 255.0).abs() < f32::EPSILON);
        assert!((b - 0xa7 as f32 / 255.0).abs() < f32::EPSILON);
    }
}
