use serde::{Deserialize, Serialize};

/// Reference data for an airport. Selected by the user through the
/// autocomplete, never created client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub icao: Option<String>,
    pub iata: Option<String>,
    pub name: Option<String>,
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    /// Preferred short code for display: IATA, else ICAO, else the city name.
    pub fn short_code(&self) -> &str {
        self.iata
            .as_deref()
            .or(self.icao.as_deref())
            .unwrap_or(&self.city)
    }

    /// Long code for the airports panel: IATA, else ICAO.
    pub fn code(&self) -> &str {
        self.iata
            .as_deref()
            .or(self.icao.as_deref())
            .unwrap_or("????")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport(iata: Option<&str>, icao: Option<&str>) -> Airport {
        Airport {
            icao: icao.map(str::to_string),
            iata: iata.map(str::to_string),
            name: None,
            city: "Amsterdam".to_string(),
            country: "Netherlands".to_string(),
            latitude: 52.3086,
            longitude: 4.7639,
        }
    }

    #[test]
    fn short_code_prefers_iata() {
        assert_eq!(airport(Some("AMS"), Some("EHAM")).short_code(), "AMS");
    }

    #[test]
    fn short_code_falls_back_to_icao_then_city() {
        assert_eq!(airport(None, Some("EHAM")).short_code(), "EHAM");
        assert_eq!(airport(None, None).short_code(), "Amsterdam");
    }
}
