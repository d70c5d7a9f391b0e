//! EPA breakpoint tables and piecewise-linear sub-index interpolation

use tracing::trace;

/// Highest value on the AQI scale
pub const AQI_MAX: u16 = 500;

/// One row of a breakpoint table: a concentration range mapped onto an index range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub conc_low: f64,
    pub conc_high: f64,
    pub index_low: u16,
    pub index_high: u16,
}

impl Breakpoint {
    const fn new(conc_low: f64, conc_high: f64, index_low: u16, index_high: u16) -> Self {
        Self {
            conc_low,
            conc_high,
            index_low,
            index_high,
        }
    }

    /// Linear interpolation of `conc` within this row, rounded half away from zero
    #[must_use]
    pub fn interpolate(&self, conc: f64) -> f64 {
        let span = self.conc_high - self.conc_low;
        let index_span = f64::from(self.index_high - self.index_low);
        ((conc - self.conc_low) / span * index_span + f64::from(self.index_low)).round()
    }
}

/// PM2.5 table, μg/m³ (24-hour average)
pub const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.0, 0, 50),
    Breakpoint::new(12.1, 35.4, 51, 100),
    Breakpoint::new(35.5, 55.4, 101, 150),
    Breakpoint::new(55.5, 150.4, 151, 200),
    Breakpoint::new(150.5, 250.4, 201, 300),
    Breakpoint::new(250.5, 350.4, 301, 400),
    Breakpoint::new(350.5, 500.4, 401, 500),
];

/// PM10 table, μg/m³ (24-hour average)
pub const PM10_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 54.0, 0, 50),
    Breakpoint::new(55.0, 154.0, 51, 100),
    Breakpoint::new(155.0, 254.0, 101, 150),
    Breakpoint::new(255.0, 354.0, 151, 200),
    Breakpoint::new(355.0, 424.0, 201, 300),
    Breakpoint::new(425.0, 504.0, 301, 400),
    Breakpoint::new(505.0, 604.0, 401, 500),
];

/// Find the row a concentration belongs to.
///
/// A row covers `[conc_low, next.conc_low)`, so values in the gap between
/// `conc_high` and the next row's `conc_low` stay in the lower row. The last
/// row is closed at its `conc_high`.
#[must_use]
pub fn find_bucket(table: &[Breakpoint], conc: f64) -> Option<&Breakpoint> {
    table.iter().enumerate().find_map(|(i, row)| {
        let in_row = match table.get(i + 1) {
            Some(next) => conc >= row.conc_low && conc < next.conc_low,
            None => conc >= row.conc_low && conc <= row.conc_high,
        };
        in_row.then_some(row)
    })
}

/// Sub-index for a single pollutant.
///
/// Negative concentrations are treated as zero. Anything that matches no row
/// (above the table or NaN) saturates at [`AQI_MAX`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sub_index(table: &[Breakpoint], conc: f64) -> u16 {
    let conc = if conc < 0.0 { 0.0 } else { conc };

    match find_bucket(table, conc) {
        Some(row) => row.interpolate(conc).clamp(0.0, f64::from(AQI_MAX)) as u16,
        None => {
            trace!(conc, "concentration beyond breakpoint table, saturating");
            AQI_MAX
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn tables_are_ascending_and_cover_full_scale() {
        for table in [&PM25_BREAKPOINTS, &PM10_BREAKPOINTS] {
            assert_eq!(table[0].index_low, 0);
            assert_eq!(table[table.len() - 1].index_high, AQI_MAX);
            for pair in table.windows(2) {
                assert!(pair[0].conc_high < pair[1].conc_low);
                assert_eq!(pair[0].index_high + 1, pair[1].index_low);
            }
        }
    }

    #[rstest]
    #[case(0.0, Some(0))]
    #[case(12.0, Some(0))]
    #[case(12.05, Some(0))] // gap stays in the lower row
    #[case(12.1, Some(1))]
    #[case(500.4, Some(6))]
    #[case(500.5, None)]
    #[case(f64::NAN, None)]
    fn pm25_bucket_lookup(#[case] conc: f64, #[case] expected: Option<usize>) {
        let got = find_bucket(&PM25_BREAKPOINTS, conc)
            .map(|row| PM25_BREAKPOINTS.iter().position(|r| r == row).unwrap());
        assert_eq!(got, expected);
    }

    #[rstest]
    #[case(&PM25_BREAKPOINTS, 12.05, 50)]
    #[case(&PM10_BREAKPOINTS, 54.5, 50)]
    #[case(&PM25_BREAKPOINTS, -4.0, 0)]
    #[case(&PM10_BREAKPOINTS, f64::INFINITY, AQI_MAX)]
    #[case(&PM25_BREAKPOINTS, f64::NAN, AQI_MAX)]
    fn sub_index_edges(#[case] table: &[Breakpoint], #[case] conc: f64, #[case] expected: u16) {
        assert_eq!(sub_index(table, conc), expected);
    }
}
