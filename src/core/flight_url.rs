use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

const SEARCH_PREFIX: &str = "https://www.google.com/travel/flights/search?tfs=";

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("invalid airport code '{0}': expected three letters (e.g. JFK)")]
    InvalidAirportCode(String),
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("return date {ret} is before departure date {depart}")]
    ReturnBeforeDeparture { depart: String, ret: String },
}

/// A validated flight search: origin/destination IATA codes plus an ISO
/// departure date and optional return date (absent = one-way).
#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuery {
    origin: String,
    destination: String,
    depart_date: String,
    return_date: Option<String>,
}

impl FlightQuery {
    pub fn new(
        origin: &str,
        destination: &str,
        depart_date: &str,
        return_date: Option<&str>,
    ) -> Result<Self, QueryError> {
        let origin = validate_code(origin)?;
        let destination = validate_code(destination)?;
        validate_date(depart_date)?;
        if let Some(ret) = return_date {
            validate_date(ret)?;
            // ISO dates compare correctly as strings
            if ret < depart_date {
                return Err(QueryError::ReturnBeforeDeparture {
                    depart: depart_date.to_string(),
                    ret: ret.to_string(),
                });
            }
        }

        Ok(FlightQuery {
            origin,
            destination,
            depart_date: depart_date.to_string(),
            return_date: return_date.map(str::to_string),
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn depart_date(&self) -> &str {
        &self.depart_date
    }

    pub fn return_date(&self) -> Option<&str> {
        self.return_date.as_deref()
    }

    /// Human-readable route line, e.g. `JFK → CUN  2026-03-10 / 2026-03-17`.
    pub fn route_label(&self) -> String {
        match &self.return_date {
            Some(ret) => format!(
                "{} → {}  {} / {}",
                self.origin, self.destination, self.depart_date, ret
            ),
            None => format!(
                "{} → {}  {} one-way",
                self.origin, self.destination, self.depart_date
            ),
        }
    }

    /// Stable key identifying the route+dates, used for alert ids and
    /// history deduplication.
    pub fn route_key(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.origin,
            self.destination,
            self.depart_date,
            self.return_date.as_deref().unwrap_or("-")
        )
    }

    /// Builds the Google Flights search URL for this query.
    ///
    /// The `tfs` parameter is a base64-encoded protobuf blob. The byte layout
    /// below was captured from live searches; Google additionally expects a
    /// run of seven underscores spliced in six characters before the end of
    /// the encoded payload.
    pub fn url(&self) -> String {
        let bytes = match &self.return_date {
            Some(ret) => round_trip_bytes(&self.origin, &self.destination, &self.depart_date, ret),
            None => one_way_bytes(&self.origin, &self.destination, &self.depart_date),
        };
        let encoded = splice_underscores(&STANDARD.encode(bytes));
        format!("{SEARCH_PREFIX}{encoded}")
    }
}

fn validate_code(code: &str) -> Result<String, QueryError> {
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(QueryError::InvalidAirportCode(code.to_string()))
    }
}

fn validate_date(date: &str) -> Result<(), QueryError> {
    let err = || QueryError::InvalidDate(date.to_string());

    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(err());
    }
    for (i, b) in bytes.iter().enumerate() {
        if i != 4 && i != 7 && !b.is_ascii_digit() {
            return Err(err());
        }
    }

    let month: u32 = date[5..7].parse().map_err(|_| err())?;
    let day: u32 = date[8..10].parse().map_err(|_| err())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(err());
    }
    Ok(())
}

fn round_trip_bytes(origin: &str, destination: &str, depart: &str, ret: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(80);
    bytes.extend_from_slice(b"\x08\x1e\x10\x02\x1a\x1e\x12\n");
    bytes.extend_from_slice(depart.as_bytes());
    bytes.extend_from_slice(b"*\x0e\x12\x0c\n\n");
    bytes.extend_from_slice(ret.as_bytes());
    bytes.extend_from_slice(b"j\x07\x08\x01\x12\x03");
    bytes.extend_from_slice(origin.as_bytes());
    bytes.extend_from_slice(b"r\x07\x08\x01\x12\x03");
    bytes.extend_from_slice(destination.as_bytes());
    bytes.extend_from_slice(b"@\x01H\x01p\x01\x82\x01\x0b\x08\xfc\x06`\x04\x08");
    bytes
}

fn one_way_bytes(origin: &str, destination: &str, depart: &str) -> Vec<u8> {
    // Round-trip layout minus the return-date segment
    let mut bytes = Vec::with_capacity(64);
    bytes.extend_from_slice(b"\x08\x1e\x10\x02\x1a\x1e\x12\n");
    bytes.extend_from_slice(depart.as_bytes());
    bytes.extend_from_slice(b"j\x07\x08\x01\x12\x03");
    bytes.extend_from_slice(origin.as_bytes());
    bytes.extend_from_slice(b"r\x07\x08\x01\x12\x03");
    bytes.extend_from_slice(destination.as_bytes());
    bytes.extend_from_slice(b"@\x01H\x01p\x01\x82\x01\x0b\x08\xfc\x06`\x04\x08");
    bytes
}

fn splice_underscores(encoded: &str) -> String {
    let insert_index = encoded.len().saturating_sub(6);
    format!(
        "{}{}{}",
        &encoded[..insert_index],
        "_______",
        &encoded[insert_index..]
    )
}
