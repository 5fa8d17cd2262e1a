use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Annotation layer a tag belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Rhetoric,
}

impl Layer {
    pub fn as_str(self) -> &'static str {
        match self {
            Layer::Rhetoric => "rhetoric",
        }
    }
}

/// The closed vocabulary of inline rhetoric markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RhetoricTag {
    /// `fr-proposta`
    Proposal,
    /// `fr-ideologia`
    Ideology,
    /// `fr-dada`
    DataClaim,
    /// `fr-atac`
    Attack,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rhetoric tag: {0}")]
pub struct UnknownTag(pub String);

impl RhetoricTag {
    /// Vocabulary order, which is also extraction order.
    pub const ALL: [RhetoricTag; 4] = [
        RhetoricTag::Proposal,
        RhetoricTag::Ideology,
        RhetoricTag::DataClaim,
        RhetoricTag::Attack,
    ];

    /// Markup element name.
    pub fn name(self) -> &'static str {
        match self {
            RhetoricTag::Proposal => "fr-proposta",
            RhetoricTag::Ideology => "fr-ideologia",
            RhetoricTag::DataClaim => "fr-dada",
            RhetoricTag::Attack => "fr-atac",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RhetoricTag::Proposal => "Proposta",
            RhetoricTag::Ideology => "Ideologia",
            RhetoricTag::DataClaim => "Dada",
            RhetoricTag::Attack => "Atac",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RhetoricTag::Proposal => "#2E7D32",
            RhetoricTag::Ideology => "#6A1B9A",
            RhetoricTag::DataClaim => "#1565C0",
            RhetoricTag::Attack => "#C62828",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            RhetoricTag::Proposal => "🟢",
            RhetoricTag::Ideology => "🟣",
            RhetoricTag::DataClaim => "🔵",
            RhetoricTag::Attack => "🔴",
        }
    }

    pub fn layer(self) -> Layer {
        Layer::Rhetoric
    }

    pub fn open_marker(self) -> String {
        format!("<{}>", self.name())
    }

    pub fn close_marker(self) -> String {
        format!("</{}>", self.name())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for RhetoricTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RhetoricTag {
    type Err = UnknownTag;

    /// Accepts the element name (`fr-atac`) or the bare suffix (`atac`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_name(s)
            .or_else(|| Self::from_name(&format!("fr-{s}")))
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl Serialize for RhetoricTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for tag in RhetoricTag::ALL {
            assert_eq!(RhetoricTag::from_name(tag.name()), Some(tag));
            assert_eq!(tag.to_string().parse::<RhetoricTag>(), Ok(tag));
        }
    }

    #[test]
    fn parse_accepts_bare_suffix() {
        assert_eq!("atac".parse::<RhetoricTag>(), Ok(RhetoricTag::Attack));
        assert_eq!(" fr-dada ".parse::<RhetoricTag>(), Ok(RhetoricTag::DataClaim));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "fr-insult".parse::<RhetoricTag>().unwrap_err();
        assert_eq!(err, UnknownTag("fr-insult".into()));
        assert_eq!(err.to_string(), "unknown rhetoric tag: fr-insult");
    }

    #[test]
    fn all_tags_are_rhetoric_layer() {
        assert!(RhetoricTag::ALL.iter().all(|t| t.layer() == Layer::Rhetoric));
    }

    #[test]
    fn markers() {
        assert_eq!(RhetoricTag::Proposal.open_marker(), "<fr-proposta>");
        assert_eq!(RhetoricTag::Proposal.close_marker(), "</fr-proposta>");
    }

    #[test]
    fn serializes_as_name() {
        let v = serde_json::to_value(RhetoricTag::Ideology).unwrap();
        assert_eq!(v, serde_json::json!("fr-ideologia"));
    }
}
