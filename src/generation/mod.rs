//! Palette generation
//!
//! Color-theory schemes derived from a base color, fixed mood palettes,
//! HSL gradients, and the catalog that maps scheme and mood names to them.

pub mod catalog;
pub mod generator;
pub mod gradient;
pub mod mood;
pub mod schemes;

pub use catalog::{
    available_moods, available_palette_types, generate_palette_by_type, palette_type_info,
    PaletteTypeInfo, SchemeKind,
};
pub use generator::{PaletteGenerator, PaletteReport};
pub use gradient::{color_gradient, multi_gradient_palette};
pub use mood::{mood_palette, Mood};
pub use schemes::{
    analogous_palette, complementary_palette, harmonious_palette, monochromatic_palette,
    split_complementary_palette, square_palette, tetradic_palette, triadic_palette,
};
