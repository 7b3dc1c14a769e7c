use clap::ValueEnum;

/// Front end the bookings are driven through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Console,
    Http,
}

pub trait Configuration: Clone + Send + Sync + 'static {
    fn allowed_sections(&self) -> Vec<String>;
    fn allowed_year(&self) -> String;
    fn port(&self) -> String;
    fn mode(&self) -> Mode;
    fn strict_time_ranges(&self) -> bool;
    fn check_update_conflicts(&self) -> bool;
}
