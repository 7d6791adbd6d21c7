use std::str::FromStr;

use fake::Fake;
use rand::Rng;

use crate::error::GenError;

/// Multi-line addresses are flattened onto one CSV field with this separator.
pub const ADDRESS_LINE_SEPARATOR: &str = ", ";

const FR_STREET_TYPES: [&str; 8] = [
    "rue",
    "avenue",
    "boulevard",
    "place",
    "impasse",
    "chemin",
    "allée",
    "quai",
];
const FR_CITIES: [&str; 12] = [
    "Paris",
    "Lyon",
    "Marseille",
    "Toulouse",
    "Nice",
    "Nantes",
    "Strasbourg",
    "Montpellier",
    "Bordeaux",
    "Lille",
    "Rennes",
    "Grenoble",
];
// metropolitan departments 01 to 95
const FR_POSTCODES: std::ops::RangeInclusive<u32> = 1000..=95999;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    En,
    #[default]
    FrFr,
}

impl Locale {
    pub fn address<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        let lines = match self {
            Locale::FrFr => {
                use fake::faker::name::fr_fr::LastName;
                let number = rng.gen_range(1..=150);
                let street_type = FR_STREET_TYPES[rng.gen_range(0..FR_STREET_TYPES.len())];
                let name: String = LastName().fake_with_rng(rng);
                let postcode = rng.gen_range(FR_POSTCODES);
                let city = FR_CITIES[rng.gen_range(0..FR_CITIES.len())];
                vec![
                    format!("{number}, {street_type} {name}"),
                    format!("{postcode:05} {city}"),
                ]
            }
            Locale::En => {
                use fake::faker::address::en::{
                    BuildingNumber, CityName, StateAbbr, StreetName, ZipCode,
                };
                let number: String = BuildingNumber().fake_with_rng(rng);
                let street: String = StreetName().fake_with_rng(rng);
                let city: String = CityName().fake_with_rng(rng);
                let state: String = StateAbbr().fake_with_rng(rng);
                let zip: String = ZipCode().fake_with_rng(rng);
                vec![
                    format!("{number} {street}"),
                    format!("{city}, {state} {zip}"),
                ]
            }
        };
        lines.join(ADDRESS_LINE_SEPARATOR)
    }
}

impl FromStr for Locale {
    type Err = GenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" | "fr_fr" | "fr-fr" => Ok(Locale::FrFr),
            _ => Err(GenError::UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::FrFr);
        assert_eq!("fr-FR".parse::<Locale>().unwrap(), Locale::FrFr);
        assert_eq!("FR_FR".parse::<Locale>().unwrap(), Locale::FrFr);
        assert!(matches!(
            "de".parse::<Locale>(),
            Err(GenError::UnknownLocale(locale)) if locale == "de"
        ));
        assert_eq!(Locale::default(), Locale::FrFr);
    }

    #[test]
    fn test_address_is_single_line() {
        let mut rng = StdRng::seed_from_u64(3);
        for locale in [Locale::En, Locale::FrFr] {
            for _ in 0..100 {
                let address = locale.address(&mut rng);
                assert!(!address.contains('\n'));
                assert!(address.contains(ADDRESS_LINE_SEPARATOR));
                assert!(!address.trim().is_empty());
            }
        }
    }

    #[test]
    fn test_french_address_format() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let address = Locale::FrFr.address(&mut rng);
            let parts: Vec<&str> = address.split(ADDRESS_LINE_SEPARATOR).collect();
            assert_eq!(parts.len(), 3, "{address}");

            assert!(parts[0].parse::<u32>().is_ok(), "{address}");
            let street_type = parts[1].split(' ').next().unwrap();
            assert!(FR_STREET_TYPES.contains(&street_type), "{address}");

            let (postcode, city) = parts[2].split_once(' ').unwrap();
            assert_eq!(postcode.len(), 5, "{address}");
            assert!(postcode.chars().all(|c| c.is_ascii_digit()), "{address}");
            assert!(FR_CITIES.contains(&city), "{address}");
        }
    }

    #[test]
    fn test_address_is_reproducible() {
        let first = Locale::FrFr.address(&mut StdRng::seed_from_u64(11));
        let second = Locale::FrFr.address(&mut StdRng::seed_from_u64(11));
        assert_eq!(first, second);
    }
}
