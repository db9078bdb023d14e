use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Treatment-system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductLine {
    BioDisc,
    BioFicient,
    BioAir,
    BioTecFlo,
}

impl ProductLine {
    pub const ALL: [ProductLine; 4] = [
        ProductLine::BioDisc,
        ProductLine::BioFicient,
        ProductLine::BioAir,
        ProductLine::BioTecFlo,
    ];

    /// Lower-case key used in datasets, URLs and translation keys.
    pub fn key(&self) -> &'static str {
        match self {
            ProductLine::BioDisc => "biodisc",
            ProductLine::BioFicient => "bioficient",
            ProductLine::BioAir => "bioair",
            ProductLine::BioTecFlo => "biotecflo",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductLine::BioDisc => "BioDisc",
            ProductLine::BioFicient => "BioFicient",
            ProductLine::BioAir => "BioAir",
            ProductLine::BioTecFlo => "BioTec Flo",
        }
    }
}

impl core::fmt::Display for ProductLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProductLine {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        ProductLine::ALL
            .into_iter()
            .find(|line| line.key() == normalized)
            .ok_or_else(|| CatalogError::UnknownLine(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_display_names() {
        for line in ProductLine::ALL {
            assert_eq!(line.key().parse::<ProductLine>().unwrap(), line);
            assert_eq!(line.display_name().parse::<ProductLine>().unwrap(), line);
        }
        assert_eq!("BioTec-Flo".parse::<ProductLine>().unwrap(), ProductLine::BioTecFlo);
    }

    #[test]
    fn rejects_unknown_line() {
        assert!(matches!(
            "rainstore".parse::<ProductLine>(),
            Err(CatalogError::UnknownLine(name)) if name == "rainstore"
        ));
    }
}
