use crate::model::flight::FlightDto;

/// Tri-state availability predicate of the flight filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    Any,
    AvailableOnly,
    FullOnly,
}

impl Availability {
    /// Parses the `value` of the availability select; unknown values mean `Any`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "available" => Availability::AvailableOnly,
            "full" => Availability::FullOnly,
            _ => Availability::Any,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            Availability::Any => "",
            Availability::AvailableOnly => "available",
            Availability::FullOnly => "full",
        }
    }

    fn matches(&self, available_seats: i64) -> bool {
        match self {
            Availability::Any => true,
            Availability::AvailableOnly => available_seats > 0,
            Availability::FullOnly => available_seats <= 0,
        }
    }
}

/// Current values of the three flight filter controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightFilter {
    /// Case-insensitive substring of the destination, empty matches everything
    pub search: String,
    /// Exact airplane name, `None` for all airplanes
    pub airplane: Option<String>,
    pub availability: Availability,
}

impl FlightFilter {
    pub fn matches(&self, flight: &FlightDto) -> bool {
        let matches_search = flight
            .destination
            .to_lowercase()
            .contains(&self.search.to_lowercase());

        let matches_airplane = match &self.airplane {
            Some(name) => &flight.airplane.name == name,
            None => true,
        };

        matches_search && matches_airplane && self.availability.matches(flight.available_seats)
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.airplane.is_none() && self.availability == Availability::Any
    }
}

/// Flights passing `filter`, in their original order.
///
/// The result borrows from `flights`, which is never modified.
pub fn filter_flights<'a>(flights: &'a [FlightDto], filter: &FlightFilter) -> Vec<&'a FlightDto> {
    flights.iter().filter(|f| filter.matches(f)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::util::test::factory::{mock_flight, mock_flight_on};

    fn flights() -> Vec<FlightDto> {
        vec![
            mock_flight_on("f1", "Paris", "Boeing 737", 12),
            mock_flight_on("f2", "Paris", "Airbus A320", 0),
            mock_flight_on("f3", "Rome", "Boeing 737", 0),
            mock_flight_on("f4", "Saint Petersburg", "Airbus A320", 3),
        ]
    }

    fn ids(flights: &[&FlightDto]) -> Vec<String> {
        flights.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let flights = flights();

        let result = filter_flights(&flights, &FlightFilter::default());

        assert_eq!(ids(&result), vec!["f1", "f2", "f3", "f4"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let flights = flights();
        let filter = FlightFilter {
            search: "PETER".to_string(),
            ..Default::default()
        };

        assert_eq!(ids(&filter_flights(&flights, &filter)), vec!["f4"]);
    }

    #[test]
    fn predicates_are_anded() {
        let flights = flights();
        let filter = FlightFilter {
            search: "paris".to_string(),
            airplane: Some("Airbus A320".to_string()),
            availability: Availability::FullOnly,
        };

        assert_eq!(ids(&filter_flights(&flights, &filter)), vec!["f2"]);
    }

    #[test]
    fn availability_splits_on_zero_seats() {
        let mut flights = flights();
        flights.push(mock_flight("f5", "Oslo", -1));

        let available = FlightFilter {
            availability: Availability::AvailableOnly,
            ..Default::default()
        };
        let full = FlightFilter {
            availability: Availability::FullOnly,
            ..Default::default()
        };

        assert_eq!(ids(&filter_flights(&flights, &available)), vec!["f1", "f4"]);
        assert_eq!(ids(&filter_flights(&flights, &full)), vec!["f2", "f3", "f5"]);
    }

    #[test]
    fn airplane_match_is_exact() {
        let flights = flights();
        let filter = FlightFilter {
            airplane: Some("Boeing".to_string()),
            ..Default::default()
        };

        assert!(filter_flights(&flights, &filter).is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_leaves_source_untouched() {
        let flights = flights();
        let before = flights.clone();
        let filter = FlightFilter {
            search: "a".to_string(),
            airplane: Some("Boeing 737".to_string()),
            availability: Availability::AvailableOnly,
        };

        let once = filter_flights(&flights, &filter);
        let owned: Vec<FlightDto> = once.iter().map(|f| (*f).clone()).collect();
        let twice = filter_flights(&owned, &filter);

        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(flights, before);
    }

    #[test]
    fn availability_select_values_round_trip() {
        for availability in [
            Availability::Any,
            Availability::AvailableOnly,
            Availability::FullOnly,
        ] {
            assert_eq!(Availability::from_value(availability.as_value()), availability);
        }
        assert_eq!(Availability::from_value("bogus"), Availability::Any);
    }
}
