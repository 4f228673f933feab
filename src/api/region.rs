use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// A Riot platform region. Accepts both the short names used on op.gg style
/// URLs (`euw`) and the platform ids used by the API itself (`euw1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Na,
    Br,
    Lan,
    Las,
    Euw,
    Eune,
    Tr,
    Ru,
    Kr,
    Jp,
    Oce,
}

impl Region {
    /// Platform routing value, used by summoner, league and mastery endpoints.
    pub fn platform(&self) -> &'static str {
        match self {
            Region::Na => "na1",
            Region::Br => "br1",
            Region::Lan => "la1",
            Region::Las => "la2",
            Region::Euw => "euw1",
            Region::Eune => "eun1",
            Region::Tr => "tr1",
            Region::Ru => "ru",
            Region::Kr => "kr",
            Region::Jp => "jp1",
            Region::Oce => "oc1",
        }
    }

    /// Regional routing value, used by account and match endpoints.
    pub fn routing(&self) -> &'static str {
        match self {
            Region::Na | Region::Br | Region::Lan | Region::Las => "americas",
            Region::Euw | Region::Eune | Region::Tr | Region::Ru => "europe",
            Region::Kr | Region::Jp => "asia",
            Region::Oce => "sea",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Br => "br",
            Region::Lan => "lan",
            Region::Las => "las",
            Region::Euw => "euw",
            Region::Eune => "eune",
            Region::Tr => "tr",
            Region::Ru => "ru",
            Region::Kr => "kr",
            Region::Jp => "jp",
            Region::Oce => "oce",
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "na" | "na1" => Ok(Region::Na),
            "br" | "br1" => Ok(Region::Br),
            "lan" | "la1" => Ok(Region::Lan),
            "las" | "la2" => Ok(Region::Las),
            "euw" | "euw1" => Ok(Region::Euw),
            "eune" | "eun1" => Ok(Region::Eune),
            "tr" | "tr1" => Ok(Region::Tr),
            "ru" => Ok(Region::Ru),
            "kr" => Ok(Region::Kr),
            "jp" | "jp1" => Ok(Region::Jp),
            "oce" | "oc1" => Ok(Region::Oce),
            _ => Err(AppError::UnknownRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("na", Region::Na, "na1", "americas")]
    #[case("NA1", Region::Na, "na1", "americas")]
    #[case("euw", Region::Euw, "euw1", "europe")]
    #[case("eun1", Region::Eune, "eun1", "europe")]
    #[case("kr", Region::Kr, "kr", "asia")]
    #[case("jp1", Region::Jp, "jp1", "asia")]
    #[case("oce", Region::Oce, "oc1", "sea")]
    #[case("la2", Region::Las, "la2", "americas")]
    fn test_parse_and_route(
        #[case] input: &str,
        #[case] expected: Region,
        #[case] platform: &str,
        #[case] routing: &str,
    ) {
        let region: Region = input.parse().unwrap();
        assert_eq!(region, expected);
        assert_eq!(region.platform(), platform);
        assert_eq!(region.routing(), routing);
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        let err = "atlantis".parse::<Region>().unwrap_err();
        assert!(matches!(err, AppError::UnknownRegion(ref r) if r == "atlantis"));
    }

    #[test]
    fn test_display_uses_short_name() {
        assert_eq!(Region::Eune.to_string(), "eune");
    }
}
