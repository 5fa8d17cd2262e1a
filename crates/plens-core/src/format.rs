//! Pure string helpers consumed by the presentation layer.

use unicode_normalization::UnicodeNormalization;

// ── Slugs ──

/// Combining diacritical marks left behind by canonical decomposition.
fn is_combining_mark(c: &char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(c)
}

/// URL slug for a name: lowercase ASCII words joined by `-`.
///
/// Returns `"unknown"` for a missing or empty name.
pub fn slugify(name: Option<&str>) -> String {
    let name = match name {
        Some(n) if !n.is_empty() => n,
        _ => return "unknown".to_string(),
    };

    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.to_lowercase().nfd().filter(|c| !is_combining_mark(c)) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

// ── Party badges ──

/// CSS badge class for a party name.
pub fn party_class(party: Option<&str>) -> &'static str {
    let p = match party {
        Some(p) if !p.is_empty() => p.to_lowercase(),
        _ => return "badge--other",
    };
    if p.contains("psc") {
        "badge--psc"
    } else if p.contains("junts") {
        "badge--junts"
    } else if p.contains("comú") || p.contains("comu") {
        "badge--bcomu"
    } else if p.contains("erc") {
        "badge--erc"
    } else if p == "pp" || p.contains("popular") {
        "badge--pp"
    } else if p.contains("vox") {
        "badge--vox"
    } else {
        "badge--other"
    }
}

// ── Polarization ──

/// Ordinal disagreement level of an intervention or session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Polarization {
    Unanimity = 1,
    MajorityAgreement = 2,
    Disagreement = 3,
    Maximum = 4,
}

impl Polarization {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Unanimity),
            2 => Some(Self::MajorityAgreement),
            3 => Some(Self::Disagreement),
            4 => Some(Self::Maximum),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unanimity => "Unanimitat",
            Self::MajorityAgreement => "Acord majoritari",
            Self::Disagreement => "Desacord",
            Self::Maximum => "Polarització màxima",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Unanimity => "🟢",
            Self::MajorityAgreement => "🟡",
            Self::Disagreement => "🟠",
            Self::Maximum => "🔴",
        }
    }
}

/// Label for a polarization level, empty outside 1-4.
pub fn pol_label(level: Option<u8>) -> &'static str {
    level
        .and_then(Polarization::from_level)
        .map(Polarization::label)
        .unwrap_or("")
}

/// Emoji for a polarization level, empty outside 1-4.
pub fn pol_emoji(level: Option<u8>) -> &'static str {
    level
        .and_then(Polarization::from_level)
        .map(Polarization::emoji)
        .unwrap_or("")
}

/// CSS badge class for a polarization level, empty when unset or zero.
pub fn pol_class(level: Option<u8>) -> String {
    match level {
        Some(l) if l > 0 => format!("badge--pol-{l}"),
        _ => String::new(),
    }
}
