use thiserror::Error;

/// Errors raised while interpreting user-supplied settings.
///
/// Reading and converting weather values never fails; only names and
/// patterns coming from the command line or the config file can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown measurement system '{0}'. Supported systems: metric, us-customary.")]
    UnknownMeasurementSystem(String),

    #[error("Unknown time zone '{0}'. Use an IANA name such as \"Europe/Berlin\".")]
    UnknownTimeZone(String),

    #[error("Invalid label pattern '{pattern}'")]
    InvalidLabelPattern { pattern: String },
}
