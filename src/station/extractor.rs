/// Positional extraction of readings from the station's live data page
use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::models::{Field, Reading};

/// Table row index → field, as laid out by the station firmware.
///
/// Row 0 is the first `<tr>` of a table. Indices not listed here carry
/// labels, headers or settings and are skipped.
pub const ROW_FIELDS: &[(usize, Field)] = &[
    (8, Field::ReceiverTime),
    (12, Field::TemperatureIndoor),
    (13, Field::HumidityIndoor),
    (14, Field::PressureAbsolute),
    (15, Field::PressureRelative),
    (16, Field::Temperature),
    (17, Field::Humidity),
    (18, Field::WindDir),
    (19, Field::WindSpeed),
    (20, Field::WindGust),
    (21, Field::SolarRadiation),
    (22, Field::Uv),
    (23, Field::Uvi),
    (24, Field::PrecipHourlyRate),
    (25, Field::PrecipDaily),
    (26, Field::PrecipWeekly),
    (27, Field::PrecipMonthly),
    (28, Field::PrecipYearly),
];

/// Look up which field a row index feeds, if any.
pub fn field_for_row(index: usize) -> Option<Field> {
    ROW_FIELDS
        .iter()
        .find(|(row, _)| *row == index)
        .map(|(_, field)| *field)
}

/// Value of the first `<input>` inside a row, empty if there is none.
fn row_input_value<'a>(row: ElementRef<'a>, input: &Selector) -> &'a str {
    row.select(input)
        .next()
        .and_then(|element| element.value().attr("value"))
        .unwrap_or("")
}

/// Build a [`Reading`] from the raw live data page.
///
/// Every table is walked in document order and rows are counted per table.
/// Unparsable numbers become zero, so one bad row never spoils the others.
pub fn extract_reading(document: &str) -> Reading {
    let table = Selector::parse("table").expect("Failed to create table selector");
    let row = Selector::parse("tr").expect("Failed to create row selector");
    let input = Selector::parse("input").expect("Failed to create input selector");

    let html = Html::parse_document(document);
    let mut reading = Reading::default();

    for table_element in html.select(&table) {
        for (index, row_element) in table_element.select(&row).enumerate() {
            let Some(field) = field_for_row(index) else {
                continue;
            };
            let value = row_input_value(row_element, &input);
            debug!("Row {} -> {:?} = '{}'", index, field, value);
            reading.set(field, value);
        }
    }

    reading
}
