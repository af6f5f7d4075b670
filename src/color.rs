// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS color string for canvas fill/stroke styles. The alpha argument
    // overrides the stored alpha channel so connection lines can fade
    // without allocating a color per particle pair.
    pub fn to_css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let lime = Color::from_u32(0xCEE056FF);
        assert_eq!(lime.r, 0xCE);
        assert_eq!(lime.g, 0xE0);
        assert_eq!(lime.b, 0x56);
        assert_eq!(lime.a, 0xFF);
    }

    #[test]
    fn css_string_uses_given_alpha() {
        let lime = Color::from_u32(0xCEE056FF);
        assert_eq!(lime.to_css(0.75), "rgba(206, 224, 86, 0.75)");
    }
}
