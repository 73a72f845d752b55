#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use tracksheet::libs::parser::{parse, ParseError};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hours: u32, minutes: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hours, minutes, 0).unwrap()
    }

    #[test]
    fn test_single_entry_without_task_level() {
        let input = "# date 290125\n    timesheet\n        ProjectOne\n            9.00 - 12.00 Did work\n";
        let entries = parse(input).unwrap();

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.date, date(2025, 1, 29));
        assert_eq!(entry.project, "ProjectOne");
        assert_eq!(entry.task, "");
        assert_eq!(entry.start, time(9, 0));
        assert_eq!(entry.end, time(12, 0));
        assert_eq!(entry.description, "Did work");
    }

    #[test]
    fn test_entry_under_named_task() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            Commissioning\n                13.00 - 17.30 Site visit\n";
        let entries = parse(input).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].project, "Centurion");
        assert_eq!(entries[0].task, "Commissioning");
        assert_eq!(entries[0].start, time(13, 0));
        assert_eq!(entries[0].end, time(17, 30));
        assert_eq!(entries[0].description, "Site visit");
    }

    #[test]
    fn test_two_projects_share_the_date() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            9.00 - 12.00 Software design\n        LandCruiser\n            12.30 - 17.00 Wiring loom\n";
        let entries = parse(input).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].project, "Centurion");
        assert_eq!(entries[1].project, "LandCruiser");
        assert_eq!(entries[0].date, date(2025, 1, 29));
        assert_eq!(entries[1].date, date(2025, 1, 29));
    }

    #[test]
    fn test_second_date_block_switches_date() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            9.00 - 12.00 Design\n# date 300125\n    timesheet\n        Centurion\n            9.00 - 10.00 Review\n";
        let entries = parse(input).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, date(2025, 1, 29));
        assert_eq!(entries[1].date, date(2025, 1, 30));
    }

    #[test]
    fn test_entries_keep_file_order() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            9.00 - 10.00 first\n            10.00 - 11.00 second\n            11.00 - 12.00 third\n";
        let entries = parse(input).unwrap();

        let descriptions: Vec<&str> = entries.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let input = "\n# date 290125\n\n    timesheet\n\n        Centurion\n\n            9.00 - 12.00 Did work\n\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            Commissioning\n                9.00 - 12.00 Did work\n            13.00 - 14.00 Standup\n";
        let first = parse(input).unwrap();
        let second = parse(input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_entry_ends_after_it_starts() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            9.00 - 12.00 a\n            12.30 - 17.00 b\n";
        let entries = parse(input).unwrap();
        assert!(entries.iter().all(|entry| entry.end > entry.start));
    }

    #[test]
    fn test_missing_dash_is_an_error() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            9.00 12.00 missing dash\n";
        let err = parse(input).unwrap_err();

        assert_eq!(
            err,
            ParseError::InvalidTimeRange {
                line: 4,
                content: "9.00 12.00 missing dash".to_string(),
            }
        );
        assert!(err.to_string().contains("line 4"));
    }

    #[test]
    fn test_end_before_start_is_an_error() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            12.00 - 9.00 backwards\n";
        match parse(input).unwrap_err() {
            ParseError::EndBeforeStart { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_length_interval_is_an_error() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            9.00 - 9.00 nothing\n";
        assert!(matches!(parse(input).unwrap_err(), ParseError::EndBeforeStart { .. }));
    }

    #[test]
    fn test_unparsable_date_is_an_error() {
        let input = "# date 999999\n    timesheet\n        Centurion\n            9.00 - 12.00 work\n";
        assert_eq!(
            parse(input).unwrap_err(),
            ParseError::InvalidDate {
                line: 1,
                token: "999999".to_string(),
            }
        );
    }

    #[test]
    fn test_date_with_wrong_length_is_an_error() {
        let input = "# date 12345\n    timesheet\n";
        assert!(matches!(parse(input).unwrap_err(), ParseError::InvalidDate { line: 1, .. }));
    }

    #[test]
    fn test_eight_digit_date_is_accepted() {
        let input = "# date 29012025\n    timesheet\n        Centurion\n            9.00 - 12.00 work\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries[0].date, date(2025, 1, 29));
    }

    #[test]
    fn test_missing_timesheet_keyword_is_an_error() {
        let input = "# date 290125\n        Centurion\n            9.00 - 12.00 work\n";
        assert_eq!(
            parse(input).unwrap_err(),
            ParseError::ExpectedTimesheet {
                line: 2,
                content: "Centurion".to_string(),
            }
        );
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let input = "# date 290125\n    Timesheet\n        Centurion\n            9.00 - 12.00 work\n";
        assert_eq!(parse(input).unwrap().len(), 1);
    }

    #[test]
    fn test_project_before_any_date_is_an_error() {
        let input = "        Centurion\n";
        assert!(matches!(parse(input).unwrap_err(), ParseError::ProjectOutsideBlock { line: 1, .. }));
    }

    #[test]
    fn test_text_at_top_level_is_an_error() {
        let input = "notes from monday\n";
        assert!(matches!(parse(input).unwrap_err(), ParseError::ExpectedDateHeader { line: 1, .. }));
    }

    #[test]
    fn test_time_line_without_project_is_an_error() {
        let input = "# date 290125\n    timesheet\n            9.00 - 12.00 work\n";
        assert!(matches!(parse(input).unwrap_err(), ParseError::MissingProject { line: 3, .. }));
    }

    #[test]
    fn test_deep_time_line_without_task_is_an_error() {
        let input = "# date 290125\n    timesheet\n        Centurion\n                9.00 - 12.00 work\n";
        assert!(matches!(parse(input).unwrap_err(), ParseError::MissingTask { line: 4, .. }));
    }

    #[test]
    fn test_project_level_time_line_clears_the_task() {
        // A time line back at task depth ends the task scope; going one
        // level deeper again needs a new task line.
        let input = "# date 290125\n    timesheet\n        Centurion\n            Commissioning\n                9.00 - 10.00 a\n            10.00 - 11.00 b\n                11.00 - 12.00 c\n";
        assert!(matches!(parse(input).unwrap_err(), ParseError::MissingTask { line: 7, .. }));
    }

    #[test]
    fn test_out_of_range_hours_are_an_error() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            25.00 - 26.00 work\n";
        assert_eq!(
            parse(input).unwrap_err(),
            ParseError::InvalidTime {
                line: 4,
                token: "25.00".to_string(),
            }
        );
    }

    #[test]
    fn test_out_of_range_minutes_are_an_error() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            9.60 - 10.00 work\n";
        assert!(matches!(parse(input).unwrap_err(), ParseError::InvalidTime { line: 4, .. }));
    }

    #[test]
    fn test_dash_glued_to_times() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            9.00-12.00 glued\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries[0].start, time(9, 0));
        assert_eq!(entries[0].end, time(12, 0));
        assert_eq!(entries[0].description, "glued");
    }

    #[test]
    fn test_description_may_be_empty() {
        let input = "# date 290125\n    timesheet\n        Centurion\n            9.00 - 12.00\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn test_tabs_count_as_one_level() {
        let input = "# date 290125\n\ttimesheet\n\t\tCenturion\n\t\t\t9.00 - 12.00 tabbed\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].project, "Centurion");
    }

    #[test]
    fn test_task_name_may_start_with_a_digit() {
        // "2nd" is not a time token, so the line is a task name.
        let input = "# date 290125\n    timesheet\n        Centurion\n            2nd floor wiring\n                9.00 - 12.00 pull cables\n";
        let entries = parse(input).unwrap();
        assert_eq!(entries[0].task, "2nd floor wiring");
    }

    #[test]
    fn test_empty_input_yields_no_entries() {
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse("\n\n").unwrap(), vec![]);
    }
}
