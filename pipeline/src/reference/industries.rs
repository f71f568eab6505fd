//! TiVA source-industry metadata.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Group assigned to codes missing from [`INDUSTRIES`].
pub const FALLBACK_GROUP: &str = "Iné";

/// Color assigned to codes missing from [`INDUSTRIES`].
pub const FALLBACK_COLOR: &str = "#9ca3af";

/// Chart palette.
pub mod palette {
    pub const PEACH_1: &str = "#F3C09F";
    pub const PEACH_2: &str = "#DC9354";
    pub const YELLOW_2: &str = "#BF8F1C";
    pub const PEACH_3: &str = "#AB7240";
    pub const PEACH_4: &str = "#7C512C";
    pub const PINK_2: &str = "#E083AC";
    pub const PINK_3: &str = "#C7508A";
    pub const PINK_4: &str = "#903863";
    pub const PINK_5: &str = "#5D213F";
    pub const TEAL_2: &str = "#69AAAF";
    pub const TEAL_3: &str = "#508387";
    pub const TEAL_4: &str = "#375D60";
    pub const TEAL_5: &str = "#213B3D";
    pub const MINT_1: &str = "#52DCCE";
    pub const MINT_2: &str = "#41B1A6";
    pub const MINT_3: &str = "#308980";
    pub const MINT_4: &str = "#20625C";
    pub const MINT_5: &str = "#113E3A";
    pub const GRAY_2: &str = "#A9A39F";
    pub const GRAY_3: &str = "#837E7B";
    pub const GRAY_4: &str = "#5E5A59";
}

use palette::*;

/// Color of each industry group. Takes precedence over the
/// per-industry color.
pub const GROUP_COLORS: &[(&str, &str)] = &[
    ("Primárny sektor", "#DC9354"),
    ("Spracovateľský priemysel", "#69AAAF"),
    ("Utility a stavebníctvo", "#AB7240"),
    ("Obchod a doprava", "#E083AC"),
    ("Súkromné služby", "#52DCCE"),
    ("Financie a nehnuteľnosti", "#5E5A59"),
    ("Verejný sektor", "#C7508A"),
];

/// Display metadata of one industry code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryMeta<'a> {
    pub code: &'a str,
    pub label: &'a str,
    pub group: &'a str,
    pub color: &'a str,
}

const fn meta(
    code: &'static str,
    label: &'static str,
    group: &'static str,
    color: &'static str,
) -> IndustryMeta<'static> {
    IndustryMeta { code, label, group, color }
}

pub const INDUSTRIES: &[IndustryMeta<'static>] = &[
    // Primárny sektor
    meta("A", "Poľnohospodárstvo a lesníctvo", "Primárny sektor", PEACH_1),
    meta("B", "Ťažba nerastných surovín", "Primárny sektor", PEACH_2),
    // Spracovateľský priemysel
    meta("C10T12", "Výroba potravín a nápojov", "Spracovateľský priemysel", TEAL_2),
    meta("C13T15", "Výroba textilu a odevov", "Spracovateľský priemysel", TEAL_3),
    meta("C16T18", "Výroba dreva, papiera a tlač", "Spracovateľský priemysel", TEAL_4),
    meta("C19T23", "Výroba chemikálií a plastov", "Spracovateľský priemysel", MINT_1),
    meta("C24_25", "Výroba kovov a kovových výrobkov", "Spracovateľský priemysel", MINT_2),
    meta("C26_27", "Výroba elektroniky a elektrotechniky", "Spracovateľský priemysel", MINT_3),
    meta("C28", "Výroba strojov a zariadení", "Spracovateľský priemysel", MINT_4),
    meta("C29_30", "Výroba dopravných prostriedkov", "Spracovateľský priemysel", MINT_5),
    meta("C31T33", "Ostatná priemyselná výroba", "Spracovateľský priemysel", TEAL_5),
    // Utility a stavebníctvo
    meta("D_E", "Energetika a verejné služby", "Utility a stavebníctvo", PEACH_3),
    meta("F", "Stavebníctvo", "Utility a stavebníctvo", PEACH_4),
    // Obchod a služby
    meta("G", "Veľkoobchod a maloobchod", "Obchod a doprava", PINK_2),
    meta("H", "Doprava a skladovanie", "Obchod a doprava", PINK_3),
    meta("I", "Ubytovanie a stravovanie", "Súkromné služby", PINK_4),
    meta("J", "Informačné a komunikačné služby", "Súkromné služby", PINK_5),
    meta("K", "Finančné služby", "Financie a nehnuteľnosti", GRAY_3),
    meta("L", "Služby v oblasti nehnuteľností", "Financie a nehnuteľnosti", GRAY_4),
    meta("M_N", "Odborné a podnikové služby", "Súkromné služby", MINT_1),
    meta("RTT", "Ostatné trhové služby", "Súkromné služby", MINT_2),
    // Verejný sektor
    meta("OTQ", "Verejný sektor", "Verejný sektor", PEACH_3),
];

static INDUSTRY_INDEX: Lazy<HashMap<&'static str, &'static IndustryMeta<'static>>> =
    Lazy::new(|| INDUSTRIES.iter().map(|m| (m.code, m)).collect());

static GROUP_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| GROUP_COLORS.iter().copied().collect());

/// Metadata for an industry code.
///
/// Unknown codes get their own code as label, the group "Iné" and a
/// neutral gray.
pub fn industry_meta(code: &str) -> IndustryMeta<'_> {
    match INDUSTRY_INDEX.get(code) {
        Some(meta) => **meta,
        None => IndustryMeta {
            code,
            label: code,
            group: FALLBACK_GROUP,
            color: FALLBACK_COLOR,
        },
    }
}

/// Color of a group, if the group has one.
pub fn group_color(group: &str) -> Option<&'static str> {
    GROUP_INDEX.get(group).copied()
}

/// Color shown for an industry: its group's color, else its own.
pub fn industry_color<'a>(meta: &IndustryMeta<'a>) -> &'a str {
    group_color(meta.group).unwrap_or(meta.color)
}
