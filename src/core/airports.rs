/// A single entry in the embedded airport table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airport {
    pub code: &'static str,
    pub city: &'static str,
    pub name: &'static str,
}

impl Airport {
    /// Combined text the fuzzy matcher runs against.
    pub fn search_label(&self) -> String {
        format!("{} {} {}", self.code, self.city, self.name)
    }
}

/// Embedded IATA table. Google Flights accepts any valid IATA code, so this
/// is a convenience list for fuzzy picking, not an allowlist; codes typed in
/// full are accepted even when absent here.
pub const AIRPORTS: &[Airport] = &[
    Airport { code: "AMS", city: "Amsterdam", name: "Schiphol" },
    Airport { code: "ATL", city: "Atlanta", name: "Hartsfield-Jackson" },
    Airport { code: "AUS", city: "Austin", name: "Austin-Bergstrom" },
    Airport { code: "BCN", city: "Barcelona", name: "El Prat" },
    Airport { code: "BKK", city: "Bangkok", name: "Suvarnabhumi" },
    Airport { code: "BOS", city: "Boston", name: "Logan International" },
    Airport { code: "CDG", city: "Paris", name: "Charles de Gaulle" },
    Airport { code: "CUN", city: "Cancun", name: "Cancun International" },
    Airport { code: "DEN", city: "Denver", name: "Denver International" },
    Airport { code: "DFW", city: "Dallas", name: "Dallas/Fort Worth" },
    Airport { code: "DXB", city: "Dubai", name: "Dubai International" },
    Airport { code: "EWR", city: "Newark", name: "Newark Liberty" },
    Airport { code: "FCO", city: "Rome", name: "Fiumicino" },
    Airport { code: "FRA", city: "Frankfurt", name: "Frankfurt am Main" },
    Airport { code: "GRU", city: "Sao Paulo", name: "Guarulhos" },
    Airport { code: "HKG", city: "Hong Kong", name: "Hong Kong International" },
    Airport { code: "HND", city: "Tokyo", name: "Haneda" },
    Airport { code: "IAD", city: "Washington", name: "Dulles International" },
    Airport { code: "ICN", city: "Seoul", name: "Incheon" },
    Airport { code: "IST", city: "Istanbul", name: "Istanbul Airport" },
    Airport { code: "JFK", city: "New York", name: "John F. Kennedy" },
    Airport { code: "LAS", city: "Las Vegas", name: "Harry Reid" },
    Airport { code: "LAX", city: "Los Angeles", name: "Los Angeles International" },
    Airport { code: "LGA", city: "New York", name: "LaGuardia" },
    Airport { code: "LHR", city: "London", name: "Heathrow" },
    Airport { code: "LIS", city: "Lisbon", name: "Humberto Delgado" },
    Airport { code: "MAD", city: "Madrid", name: "Barajas" },
    Airport { code: "MEX", city: "Mexico City", name: "Benito Juarez" },
    Airport { code: "MIA", city: "Miami", name: "Miami International" },
    Airport { code: "MUC", city: "Munich", name: "Franz Josef Strauss" },
    Airport { code: "NRT", city: "Tokyo", name: "Narita" },
    Airport { code: "ORD", city: "Chicago", name: "O'Hare" },
    Airport { code: "PHX", city: "Phoenix", name: "Sky Harbor" },
    Airport { code: "SAN", city: "San Diego", name: "San Diego International" },
    Airport { code: "SEA", city: "Seattle", name: "Seattle-Tacoma" },
    Airport { code: "SFO", city: "San Francisco", name: "San Francisco International" },
    Airport { code: "SIN", city: "Singapore", name: "Changi" },
    Airport { code: "SYD", city: "Sydney", name: "Kingsford Smith" },
    Airport { code: "YUL", city: "Montreal", name: "Trudeau" },
    Airport { code: "YVR", city: "Vancouver", name: "Vancouver International" },
    Airport { code: "YYZ", city: "Toronto", name: "Pearson" },
    Airport { code: "ZRH", city: "Zurich", name: "Zurich Airport" },
];

/// Looks up an airport by exact IATA code (case-insensitive).
pub fn by_code(code: &str) -> Option<&'static Airport> {
    AIRPORTS
        .iter()
        .find(|a| a.code.eq_ignore_ascii_case(code))
}
