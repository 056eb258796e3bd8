// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes used by the card surface and the demo host.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_swipe::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Color of an inactive indicator segment
let inactive = Color {
    a: opacity::SEGMENT_INACTIVE,
    ..palette::BLACK
};

// Inset of the indicator row
let inset = spacing::XS; // 8px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_50: Color = Color::from_rgb(0.95, 0.95, 0.96);

    // Brand colors
    pub const PRIMARY_500: Color = Color::from_rgb(0.992, 0.231, 0.435);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Inactive indicator segment over a photo.
    pub const SEGMENT_INACTIVE: f32 = 0.1;
    /// Darkest point of the bottom text gradient.
    pub const GRADIENT_BOTTOM: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of an indicator segment.
    pub const SEGMENT_HEIGHT: f32 = 4.0;

    /// Gap between indicator segments.
    pub const SEGMENT_GAP: f32 = 4.0;

    /// Fraction of the card height covered by the text gradient.
    pub const GRADIENT_COVERAGE: f32 = 0.5;

    /// Maximum card width in the demo host.
    pub const CARD_MAX_WIDTH: f32 = 420.0;

    /// Card width over height. Photos are cropped to this shape.
    pub const CARD_ASPECT_RATIO: f32 = 2.0 / 3.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Card caption (name line).
    pub const CARD_TEXT: f32 = 24.0;

    /// Large title - Empty deck heading
    pub const TITLE_LG: f32 = 28.0;

    /// Standard body
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    /// Indicator segment corners.
    pub const SEGMENT: f32 = 2.0;
    /// Card corners.
    pub const CARD: f32 = 10.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SEGMENT_INACTIVE > 0.0 && opacity::SEGMENT_INACTIVE < 1.0);

    assert!(sizing::GRADIENT_COVERAGE > 0.0 && sizing::GRADIENT_COVERAGE <= 1.0);
    assert!(radius::SEGMENT * 2.0 <= sizing::SEGMENT_HEIGHT);
    assert!(sizing::CARD_ASPECT_RATIO > 0.0);
    assert!(radius::CARD * 2.0 < sizing::CARD_MAX_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }
}
