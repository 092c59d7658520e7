/// Renders a packed `0x00RRGGBB` colour as a CSS `rgb(r,g,b)` string.
///
/// The high byte is ignored.
pub fn rgb_from_packed(color: u32) -> String {
    let r = (color & 0x00ff_0000) >> 16;
    let g = (color & 0x0000_ff00) >> 8;
    let b = color & 0x0000_00ff;
    format!("rgb({r},{g},{b})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_channels() {
        assert_eq!(rgb_from_packed(0x00ff_8000), "rgb(255,128,0)");
        assert_eq!(rgb_from_packed(0x0000_00ff), "rgb(0,0,255)");
    }

    #[test]
    fn ignores_alpha_byte() {
        assert_eq!(rgb_from_packed(0xff12_3456), "rgb(18,52,86)");
    }
}
