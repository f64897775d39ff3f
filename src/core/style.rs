// Copyright (c) 2025 tui_stage contributors. Licensed under Apache License, Version 2.0.

//! The 8-bit style-flags set from `SPEC_FULL.md` §3: bold, dim, italic, underline,
//! blink, reverse, strikethrough, undercurl.

use std::ops::{BitOr, BitOrAssign};

macro_rules! style_flags {
    ($($name:ident = $bit:expr => $fn_name:ident),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct StyleFlags(u8);

        impl StyleFlags {
            pub const NONE: StyleFlags = StyleFlags(0);
            $(pub const $name: StyleFlags = StyleFlags($bit);)+

            #[must_use]
            pub const fn bits(self) -> u8 { self.0 }

            #[must_use]
            pub const fn from_bits(bits: u8) -> Self { StyleFlags(bits) }

            #[must_use]
            pub const fn contains(self, other: StyleFlags) -> bool {
                self.0 & other.0 == other.0
            }

            $(
                #[must_use]
                pub const fn $fn_name(self) -> bool { self.contains(StyleFlags::$name) }
            )+
        }
    };
}

style_flags! {
    BOLD          = 0x01 => is_bold,
    DIM           = 0x02 => is_dim,
    ITALIC        = 0x04 => is_italic,
    UNDERLINE     = 0x08 => is_underline,
    BLINK         = 0x10 => is_blink,
    REVERSE       = 0x20 => is_reverse,
    STRIKETHROUGH = 0x40 => is_strikethrough,
    UNDERCURL     = 0x80 => is_undercurl,
}

impl BitOr for StyleFlags {
    type Output = StyleFlags;
    fn bitor(self, rhs: Self) -> Self {
        StyleFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for StyleFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// All eight flags in wire order, paired with the SGR turn-on sequence parameter used
/// by the encoder (`SPEC_FULL.md` §4.1).
pub const SGR_TABLE: &[(StyleFlags, &[u8])] = &[
    (StyleFlags::BOLD, b"1"),
    (StyleFlags::DIM, b"2"),
    (StyleFlags::ITALIC, b"3"),
    (StyleFlags::UNDERLINE, b"4"),
    (StyleFlags::BLINK, b"5"),
    (StyleFlags::REVERSE, b"7"),
    (StyleFlags::STRIKETHROUGH, b"9"),
    // Undercurl is `CSI 4:3 m`, not a plain SGR turn-on; handled separately by the
    // encoder.
];
