use crate::configuration::{Configuration, Mode};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Reserve rooms for time windows on a single day")]
pub struct ConfigurationHandler {
    /// Rooms that may be booked, comma separated
    #[arg(
        long,
        env = "BOOKING_SECTIONS",
        value_delimiter = ',',
        default_value = "INF 243,INF 244,INF 245,INF 246,INF 247"
    )]
    sections: Vec<String>,

    /// Year every booking date has to start with
    #[arg(long, env = "BOOKING_YEAR", default_value = "2024")]
    year: String,

    #[arg(short, long, env = "BOOKING_PORT", default_value = "3000")]
    port: String,

    #[arg(short, long, env = "BOOKING_MODE", value_enum, default_value_t = Mode::Console)]
    mode: Mode,

    /// Reject time windows that end before they start
    #[arg(long, env = "BOOKING_STRICT_TIME_RANGES")]
    strict_time_ranges: bool,

    /// Check updated bookings for conflicts with other bookings
    #[arg(long, env = "BOOKING_CHECK_UPDATE_CONFLICTS")]
    check_update_conflicts: bool,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!(?err, "No .env file loaded");
        }
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn allowed_sections(&self) -> Vec<String> {
        self.sections
            .iter()
            .map(|section| section.trim().to_string())
            .filter(|section| !section.is_empty())
            .collect()
    }

    fn allowed_year(&self) -> String {
        self.year.clone()
    }

    fn port(&self) -> String {
        self.port.clone()
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn strict_time_ranges(&self) -> bool {
        self.strict_time_ranges
    }

    fn check_update_conflicts(&self) -> bool {
        self.check_update_conflicts
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::BookingRules;

    #[test]
    fn test_defaults_match_default_rules() {
        let configuration = ConfigurationHandler::try_parse_from(["room_booking"]).unwrap();
        assert_eq!(configuration.mode(), Mode::Console);
        assert_eq!(configuration.port(), "3000");
        assert_eq!(
            BookingRules::from_configuration(&configuration),
            BookingRules::default()
        );
    }

    #[test]
    fn test_parse_custom_arguments() {
        let configuration = ConfigurationHandler::try_parse_from([
            "room_booking",
            "--sections",
            "A 1, B 2,,",
            "--year",
            "2025",
            "--mode",
            "http",
            "--port",
            "8080",
            "--strict-time-ranges",
            "--check-update-conflicts",
        ])
        .unwrap();

        assert_eq!(configuration.allowed_sections(), vec!["A 1", "B 2"]);
        assert_eq!(configuration.allowed_year(), "2025");
        assert_eq!(configuration.mode(), Mode::Http);
        assert_eq!(configuration.port(), "8080");
        assert!(configuration.strict_time_ranges());
        assert!(configuration.check_update_conflicts());
    }

    #[test]
    fn test_reject_unknown_mode() {
        ConfigurationHandler::try_parse_from(["room_booking", "--mode", "gui"]).unwrap_err();
    }
}
