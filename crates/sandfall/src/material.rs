//! Material tags, display palettes and the swap rule.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Identity of a particle. Never changes in place: a material change is
/// always a new particle written over the old one.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Material {
    Sand = 1,
    Water = 2,
    Stone = 3,
    Dirt = 4,
    Grass = 5,
    Fire = 6,
    Wood = 7,
    Steam = 8,
    Oil = 9,
    Explosive = 10,
    Lava = 11,
    Basalt = 12,
    Eraser = 13,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown material `{0}`")]
pub struct UnknownMaterial(pub String);

/// RGBA colour chosen once when a particle is built.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque colour from `0xRRGGBB`.
    #[must_use]
    pub const fn rgb(hex: u32) -> Self {
        Self::rgba((hex << 8) | 0xFF)
    }

    /// Colour from `0xRRGGBBAA`.
    #[must_use]
    pub const fn rgba(hex: u32) -> Self {
        Self {
            r: (hex >> 24) as u8,
            g: (hex >> 16) as u8,
            b: (hex >> 8) as u8,
            a: hex as u8,
        }
    }

    /// Packed `0xRRGGBBAA`.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }
}

const SAND: &[Color] = &[
    Color::rgb(0xFF_A5_00),
    Color::rgb(0xFF_B3_47),
    Color::rgb(0xFF_CC_66),
    Color::rgb(0xFF_D2_7F),
    Color::rgb(0xFF_E0_A3),
];
const WATER: &[Color] = &[Color::rgb(0x00_00_FF)];
const STONE: &[Color] = &[Color::rgb(0x80_80_80)];
const DIRT: &[Color] = &[
    Color::rgb(0x5D_40_37),
    Color::rgb(0x6D_4C_41),
    Color::rgb(0x79_55_48),
    Color::rgb(0x8D_6E_63),
    Color::rgba(0x80_44_22_CB),
    Color::rgba(0x27_26_26_FF),
];
const GRASS: &[Color] = &[Color::rgb(0x00_80_00)];
const FIRE: &[Color] = &[
    Color::rgb(0xFF_00_00),
    Color::rgb(0xFF_45_00),
    Color::rgb(0xFF_8C_00),
];
const WOOD: &[Color] = &[
    Color::rgb(0x8B_5A_2B),
    Color::rgb(0xA0_52_2D),
    Color::rgb(0x6F_4E_37),
];
const STEAM: &[Color] = &[Color::rgb(0xDC_DC_E6), Color::rgb(0xC8_C8_D2)];
const OIL: &[Color] = &[Color::rgb(0x3B_2F_2F), Color::rgb(0x2B_1D_0E)];
const EXPLOSIVE: &[Color] = &[Color::rgb(0xB2_22_22), Color::rgb(0xCC_33_33)];
const LAVA: &[Color] = &[
    Color::rgb(0xFF_45_00),
    Color::rgb(0xFF_63_00),
    Color::rgb(0xCF_10_20),
];
const BASALT: &[Color] = &[Color::rgb(0x3A_3A_3A), Color::rgb(0x48_48_48)];
const ERASER: &[Color] = &[Color::rgba(0x00_00_00_00)];

impl Material {
    pub const ALL: [Material; 13] = [
        Material::Sand,
        Material::Water,
        Material::Stone,
        Material::Dirt,
        Material::Grass,
        Material::Fire,
        Material::Wood,
        Material::Steam,
        Material::Oil,
        Material::Explosive,
        Material::Lava,
        Material::Basalt,
        Material::Eraser,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sand => "Sand",
            Self::Water => "Water",
            Self::Stone => "Stone",
            Self::Dirt => "Dirt",
            Self::Grass => "Grass",
            Self::Fire => "Fire",
            Self::Wood => "Wood",
            Self::Steam => "Steam",
            Self::Oil => "Oil",
            Self::Explosive => "Explosive",
            Self::Lava => "Lava",
            Self::Basalt => "Basalt",
            Self::Eraser => "Eraser",
        }
    }

    /// Materials Grass does not count as burying it.
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        matches!(self, Self::Water | Self::Steam | Self::Oil)
    }

    /// Whether the particle factory will build this material by name.
    /// Grass only ever grows out of Dirt.
    #[must_use]
    pub const fn is_placeable(self) -> bool {
        !matches!(self, Self::Grass)
    }

    #[must_use]
    pub const fn palette(self) -> &'static [Color] {
        match self {
            Self::Sand => SAND,
            Self::Water => WATER,
            Self::Stone => STONE,
            Self::Dirt => DIRT,
            Self::Grass => GRASS,
            Self::Fire => FIRE,
            Self::Wood => WOOD,
            Self::Steam => STEAM,
            Self::Oil => OIL,
            Self::Explosive => EXPLOSIVE,
            Self::Lava => LAVA,
            Self::Basalt => BASALT,
            Self::Eraser => ERASER,
        }
    }

    /// Does a `self` particle trade places with `other` when moving into its
    /// cell? Denser solids sink through liquids; liquids sink through steam.
    #[must_use]
    pub const fn swaps_with(self, other: Material) -> bool {
        match self {
            Self::Sand | Self::Dirt | Self::Grass => {
                matches!(other, Self::Water | Self::Oil)
            }
            Self::Water | Self::Oil => matches!(other, Self::Steam),
            _ => false,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = UnknownMaterial;

    /// Exact, case-sensitive match on [`Material::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMaterial(s.to_owned()))
    }
}
