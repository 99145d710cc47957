//! Per-cell rules for the HQ3x pattern table.
//!
//! Generated from the canonical hq3x case listing; every one of the 256 neighbour
//! difference patterns maps each of the nine output cells to an entry in [`CELL_RULES`].

use self::CellRule::{Always, IfDifferent};
use self::Mix::{Blend11, Blend211, Blend277, Blend31, Blend71, Center};

/// Weighted blend of neighbourhood pixels, indices in row-major `w[0..9]` order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Mix {
    Center,
    /// `(3a + b) / 4`
    Blend31(u8, u8),
    /// `(7a + b) / 8`
    Blend71(u8, u8),
    /// `(a + b) / 2`
    Blend11(u8, u8),
    /// `(2a + b + c) / 4`
    Blend211(u8, u8, u8),
    /// `(2a + 7b + 7c) / 16`
    Blend277(u8, u8, u8),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum CellRule {
    Always(Mix),
    /// Picks `then` when the two pixels of `pair` are YUV-different.
    IfDifferent { pair: (u8, u8), then: Mix, otherwise: Mix },
}

pub(crate) const CELL_RULE_COUNT: usize = 69;

pub(crate) static CELL_RULES: [CellRule; CELL_RULE_COUNT] = [
    /*  0 */ Always(Blend211(4, 3, 1)),
    /*  1 */ Always(Blend31(4, 1)),
    /*  2 */ Always(Blend211(4, 1, 5)),
    /*  3 */ Always(Blend31(4, 3)),
    /*  4 */ Always(Center),
    /*  5 */ Always(Blend31(4, 5)),
    /*  6 */ Always(Blend211(4, 7, 3)),
    /*  7 */ Always(Blend31(4, 7)),
    /*  8 */ Always(Blend211(4, 5, 7)),
    /*  9 */ Always(Blend31(4, 0)),
    /* 10 */ Always(Blend31(4, 2)),
    /* 11 */ Always(Blend31(4, 6)),
    /* 12 */ IfDifferent { pair: (3, 1), then: Blend31(4, 0), otherwise: Blend277(4, 3, 1) },
    /* 13 */ IfDifferent { pair: (3, 1), then: Center, otherwise: Blend71(4, 1) },
    /* 14 */ IfDifferent { pair: (3, 1), then: Center, otherwise: Blend71(4, 3) },
    /* 15 */ IfDifferent { pair: (3, 1), then: Center, otherwise: Blend277(4, 3, 1) },
    /* 16 */ IfDifferent { pair: (3, 1), then: Blend31(4, 0), otherwise: Blend11(3, 1) },
    /* 17 */ IfDifferent { pair: (3, 1), then: Center, otherwise: Blend31(1, 4) },
    /* 18 */ IfDifferent { pair: (3, 1), then: Blend31(4, 5), otherwise: Blend211(4, 1, 5) },
    /* 19 */ IfDifferent { pair: (3, 1), then: Center, otherwise: Blend31(4, 3) },
    /* 20 */ IfDifferent { pair: (3, 1), then: Center, otherwise: Blend11(3, 1) },
    /* 21 */ Always(Blend31(4, 8)),
    /* 22 */ IfDifferent { pair: (1, 5), then: Center, otherwise: Blend71(4, 1) },
    /* 23 */ IfDifferent { pair: (1, 5), then: Blend31(4, 2), otherwise: Blend277(4, 1, 5) },
    /* 24 */ IfDifferent { pair: (1, 5), then: Center, otherwise: Blend71(4, 5) },
    /* 25 */ IfDifferent { pair: (1, 5), then: Blend31(4, 3), otherwise: Blend211(4, 3, 1) },
    /* 26 */ IfDifferent { pair: (1, 5), then: Center, otherwise: Blend31(1, 4) },
    /* 27 */ IfDifferent { pair: (1, 5), then: Blend31(4, 2), otherwise: Blend11(1, 5) },
    /* 28 */ IfDifferent { pair: (1, 5), then: Center, otherwise: Blend31(4, 5) },
    /* 29 */ IfDifferent { pair: (1, 5), then: Center, otherwise: Blend277(4, 1, 5) },
    /* 30 */ IfDifferent { pair: (1, 5), then: Center, otherwise: Blend11(1, 5) },
    /* 31 */ IfDifferent { pair: (3, 1), then: Center, otherwise: Blend31(4, 1) },
    /* 32 */ IfDifferent { pair: (3, 1), then: Center, otherwise: Blend31(3, 4) },
    /* 33 */ IfDifferent { pair: (3, 1), then: Blend31(4, 7), otherwise: Blend211(4, 7, 3) },
    /* 34 */ IfDifferent { pair: (3, 1), then: Blend31(4, 0), otherwise: Blend211(4, 3, 1) },
    /* 35 */ IfDifferent { pair: (3, 1), then: Center, otherwise: Blend211(4, 3, 1) },
    /* 36 */ IfDifferent { pair: (1, 5), then: Blend31(4, 2), otherwise: Blend211(4, 1, 5) },
    /* 37 */ IfDifferent { pair: (7, 3), then: Center, otherwise: Blend71(4, 3) },
    /* 38 */ IfDifferent { pair: (7, 3), then: Blend31(4, 6), otherwise: Blend277(4, 3, 7) },
    /* 39 */ IfDifferent { pair: (7, 3), then: Center, otherwise: Blend71(4, 7) },
    /* 40 */ IfDifferent { pair: (7, 3), then: Blend31(4, 1), otherwise: Blend211(4, 3, 1) },
    /* 41 */ IfDifferent { pair: (7, 3), then: Center, otherwise: Blend31(3, 4) },
    /* 42 */ IfDifferent { pair: (7, 3), then: Blend31(4, 6), otherwise: Blend11(3, 7) },
    /* 43 */ IfDifferent { pair: (7, 3), then: Center, otherwise: Blend31(4, 7) },
    /* 44 */ IfDifferent { pair: (7, 3), then: Center, otherwise: Blend277(4, 3, 7) },
    /* 45 */ IfDifferent { pair: (7, 3), then: Blend31(4, 6), otherwise: Blend211(4, 7, 3) },
    /* 46 */ IfDifferent { pair: (5, 7), then: Center, otherwise: Blend71(4, 5) },
    /* 47 */ IfDifferent { pair: (5, 7), then: Center, otherwise: Blend71(4, 7) },
    /* 48 */ IfDifferent { pair: (5, 7), then: Blend31(4, 8), otherwise: Blend277(4, 5, 7) },
    /* 49 */ IfDifferent { pair: (5, 7), then: Center, otherwise: Blend277(4, 5, 7) },
    /* 50 */ IfDifferent { pair: (5, 7), then: Blend31(4, 8), otherwise: Blend211(4, 5, 7) },
    /* 51 */ IfDifferent { pair: (5, 7), then: Blend31(4, 1), otherwise: Blend211(4, 1, 5) },
    /* 52 */ IfDifferent { pair: (5, 7), then: Center, otherwise: Blend31(5, 4) },
    /* 53 */ IfDifferent { pair: (5, 7), then: Center, otherwise: Blend31(4, 7) },
    /* 54 */ IfDifferent { pair: (5, 7), then: Blend31(4, 8), otherwise: Blend11(5, 7) },
    /* 55 */ IfDifferent { pair: (7, 3), then: Center, otherwise: Blend11(3, 7) },
    /* 56 */ IfDifferent { pair: (5, 7), then: Center, otherwise: Blend31(4, 5) },
    /* 57 */ IfDifferent { pair: (5, 7), then: Blend31(4, 3), otherwise: Blend211(4, 7, 3) },
    /* 58 */ IfDifferent { pair: (5, 7), then: Center, otherwise: Blend31(7, 4) },
    /* 59 */ IfDifferent { pair: (1, 5), then: Center, otherwise: Blend31(4, 1) },
    /* 60 */ IfDifferent { pair: (1, 5), then: Center, otherwise: Blend31(5, 4) },
    /* 61 */ IfDifferent { pair: (1, 5), then: Blend31(4, 7), otherwise: Blend211(4, 5, 7) },
    /* 62 */ IfDifferent { pair: (1, 5), then: Center, otherwise: Blend211(4, 1, 5) },
    /* 63 */ IfDifferent { pair: (7, 3), then: Center, otherwise: Blend31(4, 3) },
    /* 64 */ IfDifferent { pair: (7, 3), then: Center, otherwise: Blend31(7, 4) },
    /* 65 */ IfDifferent { pair: (7, 3), then: Blend31(4, 5), otherwise: Blend211(4, 5, 7) },
    /* 66 */ IfDifferent { pair: (5, 7), then: Center, otherwise: Blend11(5, 7) },
    /* 67 */ IfDifferent { pair: (7, 3), then: Center, otherwise: Blend211(4, 7, 3) },
    /* 68 */ IfDifferent { pair: (5, 7), then: Center, otherwise: Blend211(4, 5, 7) },
];

/// Row-major output cell -> index into [`CELL_RULES`], per difference pattern.
#[rustfmt::skip]
pub(crate) static PATTERN_RULES: [[u8; 9]; 256] = [
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x00
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x01
    [ 9,  4, 10,  3,  4,  5,  6,  7,  8], // 0x02
    [ 3,  4, 10,  3,  4,  5,  6,  7,  8], // 0x03
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x04
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x05
    [ 9,  4,  5,  3,  4,  5,  6,  7,  8], // 0x06
    [ 3,  4,  5,  3,  4,  5,  6,  7,  8], // 0x07
    [ 9,  1,  2,  4,  4,  5, 11,  7,  8], // 0x08
    [ 1,  1,  2,  4,  4,  5, 11,  7,  8], // 0x09
    [12, 13, 10, 14,  4,  5, 11,  7,  8], // 0x0A
    [15, 13, 10, 14,  4,  5, 11,  7,  8], // 0x0B
    [ 9,  1,  2,  4,  4,  5, 11,  7,  8], // 0x0C
    [ 1,  1,  2,  4,  4,  5, 11,  7,  8], // 0x0D
    [16, 17, 18, 19,  4,  5, 11,  7,  8], // 0x0E
    [20, 17, 18, 19,  4,  5, 11,  7,  8], // 0x0F
    [ 0,  1, 10,  3,  4,  4,  6,  7, 21], // 0x10
    [ 0,  1, 10,  3,  4,  4,  6,  7, 21], // 0x11
    [ 9, 22, 23,  3,  4, 24,  6,  7, 21], // 0x12
    [25, 26, 27,  3,  4, 28,  6,  7, 21], // 0x13
    [ 0,  1,  1,  3,  4,  4,  6,  7, 21], // 0x14
    [ 0,  1,  1,  3,  4,  4,  6,  7, 21], // 0x15
    [ 9, 22, 29,  3,  4, 24,  6,  7, 21], // 0x16
    [25, 26, 30,  3,  4, 28,  6,  7, 21], // 0x17
    [ 9,  1, 10,  4,  4,  4, 11,  7, 21], // 0x18
    [ 1,  1, 10,  4,  4,  4, 11,  7, 21], // 0x19
    [15,  4, 29, 14,  4, 24, 11,  7, 21], // 0x1A
    [15, 13, 10, 14,  4,  4, 11,  7, 21], // 0x1B
    [ 9,  1,  1,  4,  4,  4, 11,  7, 21], // 0x1C
    [ 1,  1,  1,  4,  4,  4, 11,  7, 21], // 0x1D
    [ 9, 22, 29,  4,  4, 24, 11,  7, 21], // 0x1E
    [15,  4, 29, 14,  4, 24, 11,  7, 21], // 0x1F
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x20
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x21
    [ 9,  4, 10,  3,  4,  5,  6,  7,  8], // 0x22
    [ 3,  4, 10,  3,  4,  5,  6,  7,  8], // 0x23
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x24
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x25
    [ 9,  4,  5,  3,  4,  5,  6,  7,  8], // 0x26
    [ 3,  4,  5,  3,  4,  5,  6,  7,  8], // 0x27
    [ 9,  1,  2,  4,  4,  5,  7,  7,  8], // 0x28
    [ 1,  1,  2,  4,  4,  5,  7,  7,  8], // 0x29
    [16, 31, 10, 32,  4,  5, 33,  7,  8], // 0x2A
    [20, 31, 10, 32,  4,  5, 33,  7,  8], // 0x2B
    [ 9,  1,  2,  4,  4,  5,  7,  7,  8], // 0x2C
    [ 1,  1,  2,  4,  4,  5,  7,  7,  8], // 0x2D
    [34,  4,  5,  4,  4,  5,  7,  7,  8], // 0x2E
    [35,  4,  5,  4,  4,  5,  7,  7,  8], // 0x2F
    [ 0,  1, 10,  3,  4,  4,  6,  7, 21], // 0x30
    [ 0,  1, 10,  3,  4,  4,  6,  7, 21], // 0x31
    [ 9, 22, 23,  3,  4, 24,  6,  7, 21], // 0x32
    [25, 26, 27,  3,  4, 28,  6,  7, 21], // 0x33
    [ 0,  1,  1,  3,  4,  4,  6,  7, 21], // 0x34
    [ 0,  1,  1,  3,  4,  4,  6,  7, 21], // 0x35
    [ 9, 22, 29,  3,  4, 24,  6,  7, 21], // 0x36
    [25, 26, 30,  3,  4, 28,  6,  7, 21], // 0x37
    [ 9,  1, 10,  4,  4,  4,  7,  7, 21], // 0x38
    [ 1,  1, 10,  4,  4,  4,  7,  7, 21], // 0x39
    [34,  4, 36,  4,  4,  4,  7,  7, 21], // 0x3A
    [15, 13, 36, 14,  4,  4,  7,  7, 21], // 0x3B
    [ 9,  1,  1,  4,  4,  4,  7,  7, 21], // 0x3C
    [ 1,  1,  1,  4,  4,  4,  7,  7, 21], // 0x3D
    [ 9, 22, 29,  4,  4, 24,  7,  7, 21], // 0x3E
    [35,  4, 29,  4,  4, 24,  7,  7, 21], // 0x3F
    [ 0,  1,  2,  3,  4,  5, 11,  4, 21], // 0x40
    [ 0,  1,  2,  3,  4,  5, 11,  4, 21], // 0x41
    [ 9,  4, 10,  3,  4,  5, 11,  4, 21], // 0x42
    [ 3,  4, 10,  3,  4,  5, 11,  4, 21], // 0x43
    [ 0,  1,  2,  3,  4,  5, 11,  4, 21], // 0x44
    [ 0,  1,  2,  3,  4,  5, 11,  4, 21], // 0x45
    [ 9,  4,  5,  3,  4,  5, 11,  4, 21], // 0x46
    [ 3,  4,  5,  3,  4,  5, 11,  4, 21], // 0x47
    [ 9,  1,  2, 37,  4,  5, 38, 39, 21], // 0x48
    [40,  1,  2, 41,  4,  5, 42, 43, 21], // 0x49
    [15, 13, 10,  4,  4,  5, 44, 39, 21], // 0x4A
    [15, 13, 10, 14,  4,  5, 11,  4, 21], // 0x4B
    [ 9,  1,  2, 37,  4,  5, 38, 39, 21], // 0x4C
    [40,  1,  2, 41,  4,  5, 42, 43, 21], // 0x4D
    [34,  4,  5,  4,  4,  5, 45,  4, 21], // 0x4E
    [15, 13,  5, 14,  4,  5, 45,  4, 21], // 0x4F
    [ 0,  1, 10,  3,  4, 46, 11, 47, 48], // 0x50
    [ 0,  1, 10,  3,  4, 46, 11, 47, 48], // 0x51
    [ 9, 22, 29,  3,  4,  4, 11, 47, 49], // 0x52
    [ 3,  4, 36,  3,  4,  4, 11,  4, 50], // 0x53
    [ 0,  1, 51,  3,  4, 52, 11, 53, 54], // 0x54
    [ 0,  1, 51,  3,  4, 52, 11, 53, 54], // 0x55
    [ 9, 22, 29,  3,  4, 24, 11,  4, 21], // 0x56
    [ 3, 22, 29,  3,  4, 24, 11,  4, 50], // 0x57
    [ 9,  1, 10, 37,  4, 46, 44,  4, 49], // 0x58
    [ 1,  1, 10,  4,  4,  4, 45,  4, 50], // 0x59
    [34,  4, 36,  4,  4,  4, 45,  4, 50], // 0x5A
    [15, 13, 36, 14,  4,  4, 45,  4, 50], // 0x5B
    [ 9,  1,  1,  4,  4,  4, 45,  4, 50], // 0x5C
    [ 1,  1,  1,  4,  4,  4, 45,  4, 50], // 0x5D
    [34, 22, 29,  4,  4, 24, 45,  4, 50], // 0x5E
    [15,  4, 29, 14,  4, 24, 11,  4, 21], // 0x5F
    [ 0,  1,  2,  3,  4,  5,  3,  4, 21], // 0x60
    [ 0,  1,  2,  3,  4,  5,  3,  4, 21], // 0x61
    [ 9,  4, 10,  3,  4,  5,  3,  4, 21], // 0x62
    [ 3,  4, 10,  3,  4,  5,  3,  4, 21], // 0x63
    [ 0,  1,  2,  3,  4,  5,  3,  4, 21], // 0x64
    [ 0,  1,  2,  3,  4,  5,  3,  4, 21], // 0x65
    [ 9,  4,  5,  3,  4,  5,  3,  4, 21], // 0x66
    [ 3,  4,  5,  3,  4,  5,  3,  4, 21], // 0x67
    [ 9,  1,  2, 37,  4,  5, 44, 39, 21], // 0x68
    [40,  1,  2, 41,  4,  5, 55, 43, 21], // 0x69
    [ 9,  4, 10, 37,  4,  5, 44, 39, 21], // 0x6A
    [15, 13, 10,  4,  4,  5, 44, 39, 21], // 0x6B
    [ 9,  1,  2, 37,  4,  5, 44, 39, 21], // 0x6C
    [40,  1,  2, 41,  4,  5, 55, 43, 21], // 0x6D
    [ 9,  4,  5, 37,  4,  5, 44, 39, 21], // 0x6E
    [35,  4,  5,  4,  4,  5, 44, 39, 21], // 0x6F
    [ 0,  1, 10,  3,  4, 56, 57, 58, 54], // 0x70
    [ 0,  1, 10,  3,  4, 56, 57, 58, 54], // 0x71
    [ 9,  4, 36,  3,  4,  4,  3,  4, 50], // 0x72
    [ 3,  4, 36,  3,  4,  4,  3,  4, 50], // 0x73
    [ 0,  1,  1,  3,  4,  4,  3,  4, 50], // 0x74
    [ 0,  1,  1,  3,  4,  4,  3,  4, 50], // 0x75
    [ 9, 22, 29,  3,  4, 24,  3,  4, 21], // 0x76
    [25, 26, 30,  3,  4, 28,  3,  4, 21], // 0x77
    [ 9,  1, 10, 37,  4,  4, 44, 39, 21], // 0x78
    [ 1,  1, 10, 37,  4,  4, 44, 39, 50], // 0x79
    [34,  4, 36, 37,  4,  4, 44, 39, 50], // 0x7A
    [15, 13, 10,  4,  4,  4, 44, 39, 21], // 0x7B
    [ 9,  1,  1, 37,  4,  4, 44, 39, 21], // 0x7C
    [40,  1,  1, 41,  4,  4, 55, 43, 21], // 0x7D
    [ 9, 22, 29, 37,  4, 24, 44, 39, 21], // 0x7E
    [35, 13, 29, 14,  4, 24, 44, 39, 21], // 0x7F
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x80
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x81
    [ 9,  4, 10,  3,  4,  5,  6,  7,  8], // 0x82
    [ 3,  4, 10,  3,  4,  5,  6,  7,  8], // 0x83
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x84
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0x85
    [ 9,  4,  5,  3,  4,  5,  6,  7,  8], // 0x86
    [ 3,  4,  5,  3,  4,  5,  6,  7,  8], // 0x87
    [ 9,  1,  2,  4,  4,  5, 11,  7,  8], // 0x88
    [ 1,  1,  2,  4,  4,  5, 11,  7,  8], // 0x89
    [12, 13, 10, 14,  4,  5, 11,  7,  8], // 0x8A
    [15, 13, 10, 14,  4,  5, 11,  7,  8], // 0x8B
    [ 9,  1,  2,  4,  4,  5, 11,  7,  8], // 0x8C
    [ 1,  1,  2,  4,  4,  5, 11,  7,  8], // 0x8D
    [16, 17, 18, 19,  4,  5, 11,  7,  8], // 0x8E
    [20, 17, 18, 19,  4,  5, 11,  7,  8], // 0x8F
    [ 0,  1, 10,  3,  4,  4,  6,  7,  7], // 0x90
    [ 0,  1, 10,  3,  4,  4,  6,  7,  7], // 0x91
    [ 9, 59, 27,  3,  4, 60,  6,  7, 61], // 0x92
    [ 3,  4, 36,  3,  4,  4,  6,  7,  7], // 0x93
    [ 0,  1,  1,  3,  4,  4,  6,  7,  7], // 0x94
    [ 0,  1,  1,  3,  4,  4,  6,  7,  7], // 0x95
    [ 9, 59, 30,  3,  4, 60,  6,  7, 61], // 0x96
    [ 3,  4, 62,  3,  4,  4,  6,  7,  7], // 0x97
    [ 9,  1, 10,  4,  4,  4, 11,  7,  7], // 0x98
    [ 1,  1, 10,  4,  4,  4, 11,  7,  7], // 0x99
    [34,  4, 36,  4,  4,  4, 11,  7,  7], // 0x9A
    [15, 13, 10, 14,  4,  4, 11,  7,  7], // 0x9B
    [ 9,  1,  1,  4,  4,  4, 11,  7,  7], // 0x9C
    [ 1,  1,  1,  4,  4,  4, 11,  7,  7], // 0x9D
    [34, 22, 29,  4,  4, 24, 11,  7,  7], // 0x9E
    [15,  4, 62, 14,  4,  4, 11,  7,  7], // 0x9F
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0xA0
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0xA1
    [ 9,  4, 10,  3,  4,  5,  6,  7,  8], // 0xA2
    [ 3,  4, 10,  3,  4,  5,  6,  7,  8], // 0xA3
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0xA4
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8], // 0xA5
    [ 9,  4,  5,  3,  4,  5,  6,  7,  8], // 0xA6
    [ 3,  4,  5,  3,  4,  5,  6,  7,  8], // 0xA7
    [ 9,  1,  2,  4,  4,  5,  7,  7,  8], // 0xA8
    [ 1,  1,  2,  4,  4,  5,  7,  7,  8], // 0xA9
    [16, 31, 10, 32,  4,  5, 33,  7,  8], // 0xAA
    [20, 31, 10, 32,  4,  5, 33,  7,  8], // 0xAB
    [ 9,  1,  2,  4,  4,  5,  7,  7,  8], // 0xAC
    [ 1,  1,  2,  4,  4,  5,  7,  7,  8], // 0xAD
    [34,  4,  5,  4,  4,  5,  7,  7,  8], // 0xAE
    [35,  4,  5,  4,  4,  5,  7,  7,  8], // 0xAF
    [ 0,  1, 10,  3,  4,  4,  6,  7,  7], // 0xB0
    [ 0,  1, 10,  3,  4,  4,  6,  7,  7], // 0xB1
    [ 9, 59, 27,  3,  4, 60,  6,  7, 61], // 0xB2
    [ 3,  4, 36,  3,  4,  4,  6,  7,  7], // 0xB3
    [ 0,  1,  1,  3,  4,  4,  6,  7,  7], // 0xB4
    [ 0,  1,  1,  3,  4,  4,  6,  7,  7], // 0xB5
    [ 9, 59, 30,  3,  4, 60,  6,  7, 61], // 0xB6
    [ 3,  4, 62,  3,  4,  4,  6,  7,  7], // 0xB7
    [ 9,  1, 10,  4,  4,  4,  7,  7,  7], // 0xB8
    [ 1,  1, 10,  4,  4,  4,  7,  7,  7], // 0xB9
    [34,  4, 36,  4,  4,  4,  7,  7,  7], // 0xBA
    [20, 31, 10, 32,  4,  4, 33,  7,  7], // 0xBB
    [ 9,  1,  1,  4,  4,  4,  7,  7,  7], // 0xBC
    [ 1,  1,  1,  4,  4,  4,  7,  7,  7], // 0xBD
    [ 9, 59, 30,  4,  4, 60,  7,  7, 61], // 0xBE
    [35,  4, 62,  4,  4,  4,  7,  7,  7], // 0xBF
    [ 0,  1,  2,  3,  4,  5, 11,  4,  5], // 0xC0
    [ 0,  1,  2,  3,  4,  5, 11,  4,  5], // 0xC1
    [ 9,  4, 10,  3,  4,  5, 11,  4,  5], // 0xC2
    [ 3,  4, 10,  3,  4,  5, 11,  4,  5], // 0xC3
    [ 0,  1,  2,  3,  4,  5, 11,  4,  5], // 0xC4
    [ 0,  1,  2,  3,  4,  5, 11,  4,  5], // 0xC5
    [ 9,  4,  5,  3,  4,  5, 11,  4,  5], // 0xC6
    [ 3,  4,  5,  3,  4,  5, 11,  4,  5], // 0xC7
    [ 9,  1,  2, 63,  4,  5, 42, 64, 65], // 0xC8
    [ 1,  1,  2,  4,  4,  5, 45,  4,  5], // 0xC9
    [34,  4, 10,  4,  4,  5, 45,  4,  5], // 0xCA
    [15, 13, 10, 14,  4,  5, 11,  4,  5], // 0xCB
    [ 9,  1,  2, 63,  4,  5, 42, 64, 65], // 0xCC
    [ 1,  1,  2,  4,  4,  5, 45,  4,  5], // 0xCD
    [34,  4,  5,  4,  4,  5, 45,  4,  5], // 0xCE
    [20, 17, 18, 19,  4,  5, 11,  4,  5], // 0xCF
    [ 0,  1, 10,  3,  4, 46, 11, 47, 49], // 0xD0
    [ 0,  1, 10,  3,  4, 46, 11, 47, 49], // 0xD1
    [ 9,  4, 10,  3,  4, 46, 11, 47, 49], // 0xD2
    [ 3,  4, 10,  3,  4, 46, 11, 47, 49], // 0xD3
    [ 0,  1, 51,  3,  4, 52, 11, 53, 66], // 0xD4
    [ 0,  1, 51,  3,  4, 52, 11, 53, 66], // 0xD5
    [ 9, 22, 29,  3,  4,  4, 11, 47, 49], // 0xD6
    [ 3,  4, 62,  3,  4,  4, 11, 47, 49], // 0xD7
    [ 9,  1, 10,  4,  4, 46, 11, 47, 49], // 0xD8
    [ 1,  1, 10,  4,  4, 46, 11, 47, 49], // 0xD9
    [34,  4, 36,  4,  4, 46, 45, 47, 49], // 0xDA
    [15, 13, 10, 14,  4, 46, 11, 47, 49], // 0xDB
    [ 9,  1,  1,  4,  4, 46, 45, 47, 49], // 0xDC
    [ 1,  1, 51,  4,  4, 52, 11, 53, 66], // 0xDD
    [ 9, 22, 29,  4,  4,  4, 11, 47, 49], // 0xDE
    [15, 22, 62, 14,  4, 24, 11, 47, 49], // 0xDF
    [ 0,  1,  2,  3,  4,  5,  3,  4,  5], // 0xE0
    [ 0,  1,  2,  3,  4,  5,  3,  4,  5], // 0xE1
    [ 9,  4, 10,  3,  4,  5,  3,  4,  5], // 0xE2
    [ 3,  4, 10,  3,  4,  5,  3,  4,  5], // 0xE3
    [ 0,  1,  2,  3,  4,  5,  3,  4,  5], // 0xE4
    [ 0,  1,  2,  3,  4,  5,  3,  4,  5], // 0xE5
    [ 9,  4,  5,  3,  4,  5,  3,  4,  5], // 0xE6
    [ 3,  4,  5,  3,  4,  5,  3,  4,  5], // 0xE7
    [ 9,  1,  2, 63,  4,  5, 55, 64, 65], // 0xE8
    [ 1,  1,  2,  4,  4,  5, 67,  4,  5], // 0xE9
    [34,  4, 10, 37,  4,  5, 44, 39,  5], // 0xEA
    [15, 13, 10,  4,  4,  5, 67,  4,  5], // 0xEB
    [ 9,  1,  2, 63,  4,  5, 55, 64, 65], // 0xEC
    [ 1,  1,  2,  4,  4,  5, 67,  4,  5], // 0xED
    [ 9,  4,  5, 63,  4,  5, 55, 64, 65], // 0xEE
    [35,  4,  5,  4,  4,  5, 67,  4,  5], // 0xEF
    [ 0,  1, 10,  3,  4, 56, 57, 58, 66], // 0xF0
    [ 0,  1, 10,  3,  4, 56, 57, 58, 66], // 0xF1
    [ 9,  4, 36,  3,  4, 46,  3, 47, 49], // 0xF2
    [ 3,  4, 10,  3,  4, 56, 57, 58, 66], // 0xF3
    [ 0,  1,  1,  3,  4,  4,  3,  4, 68], // 0xF4
    [ 0,  1,  1,  3,  4,  4,  3,  4, 68], // 0xF5
    [ 9, 22, 29,  3,  4,  4,  3,  4, 68], // 0xF6
    [ 3,  4, 62,  3,  4,  4,  3,  4, 68], // 0xF7
    [ 9,  1, 10, 37,  4, 46, 44,  4, 49], // 0xF8
    [ 1,  1, 10,  4,  4, 46, 67,  4, 49], // 0xF9
    [ 9,  4, 10, 37,  4, 46, 44,  4, 49], // 0xFA
    [15, 13, 10, 37,  4, 46, 67, 39, 49], // 0xFB
    [ 9,  1,  1, 37,  4,  4, 44,  4, 68], // 0xFC
    [ 1,  1,  1,  4,  4,  4, 67,  4, 68], // 0xFD
    [ 9, 22, 29, 37,  4, 46, 44, 47, 68], // 0xFE
    [35,  4, 62,  4,  4,  4, 67,  4, 68], // 0xFF
];
