pub mod cache;
pub mod config;
pub mod fleet;
pub mod generators;
pub mod logger;
pub mod metrics;
pub mod pages;
pub mod report;
pub mod roster;

/// Macro for joining a list of printable cells into one report row
///
/// # Examples
///
/// let row = join_row![
///     "  ";
///     vehicle.id,
///     vehicle.odometer_km,
///     ...
/// ];
#[macro_export]
macro_rules! join_row {
    ( $delimiter:expr; $( $cell:expr ),+ $(,)? ) => {{
        let result = [
        $(
            $cell.to_string(),
        )+
        ];
        result.join($delimiter)
    }}
}
