//! Integration tests for bikeshare-common crate.

use bikeshare_common::{
    format_duration, format_hour, month_name, weekday_name, BikeshareError, City, DayFilter,
    FilterSelection, MonthFilter, ALL_KEYWORD, MONTH_NAMES, WEEKDAY_NAMES,
};
use chrono::Weekday;

#[test]
fn test_city_display_and_files() {
    assert_eq!(City::NewYorkCity.to_string(), "new york city");
    assert_eq!(City::NewYorkCity.title(), "New York City");
    assert_eq!(City::Washington.default_file(), "washington.csv");
}

#[test]
fn test_city_serialization_uses_prompt_names() {
    let serialized = serde_json::to_string(&City::NewYorkCity).unwrap();
    assert_eq!(serialized, "\"new york city\"");

    let deserialized: City = serde_json::from_str("\"chicago\"").unwrap();
    assert_eq!(deserialized, City::Chicago);
}

#[test]
fn test_every_enumerated_name_parses() {
    for (index, name) in MONTH_NAMES.iter().enumerate() {
        let filter: MonthFilter = name.parse().unwrap();
        assert_eq!(filter, MonthFilter::Month(index as u32 + 1));
        assert_eq!(filter.to_string(), *name);
    }
    for name in WEEKDAY_NAMES {
        let filter: DayFilter = name.parse().unwrap();
        assert_eq!(filter.to_string(), name);
    }
    assert_eq!(ALL_KEYWORD.parse::<MonthFilter>().unwrap(), MonthFilter::All);
    assert_eq!(ALL_KEYWORD.parse::<DayFilter>().unwrap(), DayFilter::All);
}

#[test]
fn test_rejected_input_is_named_in_error() {
    let err = "july".parse::<MonthFilter>().unwrap_err();
    assert!(matches!(
        &err,
        BikeshareError::Validation { field, value } if field == "month" && value == "july"
    ));
    assert!(err.is_recoverable());
}

#[test]
fn test_filter_selection_display() {
    let selection = FilterSelection::new(
        City::Chicago,
        MonthFilter::Month(3),
        DayFilter::Day(Weekday::Fri),
    );
    assert_eq!(selection.to_string(), "city=chicago month=march day=friday");
    assert_eq!(
        FilterSelection::whole_city(City::Washington).to_string(),
        "city=washington month=all day=all"
    );
}

#[test]
fn test_calendar_names() {
    assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    assert_eq!(month_name(3), "March");
}

#[test]
fn test_report_formatting() {
    assert_eq!(format_hour(9), "09:00hrs");
    assert_eq!(format_duration(9270.5), "0 days 02:34:30.500000");
    assert_eq!(format_duration(1158.8125), "0 days 00:19:18.812500");
}
