/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Rounds `value` to `precision` decimal places, halves to the even neighbour
///
/// # Examples
/// ```
/// use oanda_client::model::utils::round_to_precision;
/// assert_eq!(round_to_precision(12.7, 0), 13.0);
/// assert_eq!(round_to_precision(1.23456, 2), 1.23);
/// assert_eq!(round_to_precision(2.5, 0), 2.0);
/// ```
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round_ties_even() / factor;
    // normalise -0.0 so it never reaches the wire as "-0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Rounds and renders `value` with exactly `precision` decimals
///
/// This is the string form the API expects for units and prices.
///
/// # Examples
/// ```
/// use oanda_client::model::utils::format_decimal;
/// assert_eq!(format_decimal(12.7, 0), "13");
/// assert_eq!(format_decimal(-100.0, 0), "-100");
/// assert_eq!(format_decimal(1.23456, 2), "1.23");
/// ```
pub fn format_decimal(value: f64, precision: u32) -> String {
    format!(
        "{:.*}",
        precision as usize,
        round_to_precision(value, precision)
    )
}

/// Splits an instrument name such as `EUR_USD` into base and quote currency
pub fn split_instrument(name: &str) -> Option<(&str, &str)> {
    let (base, quote) = name.split_once('_')?;
    if base.is_empty() || quote.is_empty() {
        return None;
    }
    Some((base, quote))
}
