use chrono::NaiveDate;

use vklad_core::{HistoricalSeries, PricePoint};

pub fn by_symbol(s: &str) -> Option<HistoricalSeries> {
    match s {
        // 21% growth over 365 days; annualizes to just above 21%.
        "GAZP" => series(&[
            ("2023-01-01", 100.0),
            ("2023-04-03", 104.0),
            ("2023-07-03", 109.5),
            ("2023-10-02", 115.0),
            ("2024-01-01", 121.0),
        ]),
        "SBER" => series(&[
            ("2023-01-09", 141.0),
            ("2023-05-02", 238.0),
            ("2023-09-01", 261.0),
            ("2024-01-09", 272.5),
        ]),
        "LKOH" => series(&[
            ("2023-01-09", 4100.0),
            ("2023-07-03", 5400.0),
            ("2024-01-09", 6750.0),
        ]),
        // A losing year.
        "YNDX" => series(&[
            ("2023-01-09", 2000.0),
            ("2023-07-03", 2450.0),
            ("2024-01-09", 1850.0),
        ]),
        _ => None,
    }
}

fn series(points: &[(&str, f64)]) -> Option<HistoricalSeries> {
    let points = points
        .iter()
        .map(|&(date, close)| {
            Some(PricePoint {
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?,
                close,
            })
        })
        .collect::<Option<Vec<_>>>()?;
    HistoricalSeries::new(points).ok()
}
