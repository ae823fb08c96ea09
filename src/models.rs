//! Frontend Models
//!
//! Data structures shared by the cart, theme and modal features.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One cart entry: a plan and its price at the moment it was added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,
    pub plan: String,
    /// `None` when the price text did not parse (persisted as `null`)
    pub price: Option<i64>,
    pub date: DateTime<Utc>,
}

/// Visual mode of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only `"dark"` selects dark mode; any other tag falls back to light
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }
}

/// Legal text variants a modal trigger can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Terms,
    Privacy,
    Security,
    Other,
}

impl ModalKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "terms" => ModalKind::Terms,
            "privacy" => ModalKind::Privacy,
            "security" => ModalKind::Security,
            _ => ModalKind::Other,
        }
    }
}

/// A plan card offered on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanOffer {
    pub name: &'static str,
    /// Kept as text: the cart parses it the same way for every plan
    pub price_text: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

/// Plans shown in the pricing section
pub const PLANS: &[PlanOffer] = &[
    PlanOffer {
        name: "Essencial",
        price_text: "199",
        tagline: "Para um compromisso pontual",
        features: &["Até 3 horas de companhia", "Evento social ou jantar", "Confirmação em 24h"],
        highlighted: false,
    },
    PlanOffer {
        name: "Premium",
        price_text: "399",
        tagline: "O mais escolhido",
        features: &["Até 6 horas de companhia", "Eventos corporativos e festas", "Consultoria de traje", "Suporte prioritário"],
        highlighted: true,
    },
    PlanOffer {
        name: "Exclusivo",
        price_text: "799",
        tagline: "Para ocasiões especiais",
        features: &["Diária completa", "Viagens e casamentos", "Profissional dedicado", "Suporte 24/7"],
        highlighted: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_tags() {
        assert_eq!(Theme::from_tag("dark"), Theme::Dark);
        assert_eq!(Theme::from_tag("light"), Theme::Light);
        assert_eq!(Theme::from_tag("sepia"), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_modal_kind_tags() {
        assert_eq!(ModalKind::from_tag("terms"), ModalKind::Terms);
        assert_eq!(ModalKind::from_tag("privacy"), ModalKind::Privacy);
        assert_eq!(ModalKind::from_tag("security"), ModalKind::Security);
        assert_eq!(ModalKind::from_tag(""), ModalKind::Other);
    }
}
