#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use rekap::libs::export::{cell_color, ReportFormat, ReportWriter};
    use rekap::libs::roster::{build_report, AbsenceRegister, OaRow};
    use rust_xlsxwriter::Color;
    use tempfile::TempDir;

    fn sample_report() -> rekap::libs::roster::ReportTable {
        let oa_rows = vec![
            OaRow {
                name: "张三".to_string(),
                department: "Engineering".to_string(),
                gender: "F".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                shift_label: "09:00-18:00".to_string(),
                checkin: NaiveTime::from_hms_opt(9, 10, 0),
                checkout: NaiveTime::from_hms_opt(18, 0, 0),
            },
            OaRow {
                name: "李四".to_string(),
                department: "Sales".to_string(),
                gender: "M".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                shift_label: "09:00-18:00".to_string(),
                checkin: None,
                checkout: None,
            },
        ];
        build_report(&oa_rows, &AbsenceRegister::default())
    }

    #[test]
    fn test_absent_marker_maps_to_violet() {
        assert_eq!(cell_color("absent"), Some(Color::RGB(0xEE82EE)));
    }

    #[test]
    fn test_late_marker_maps_to_green() {
        assert_eq!(cell_color("late 10 min,checked out on time"), Some(Color::Green));
    }

    #[test]
    fn test_early_marker_maps_to_yellow() {
        assert_eq!(cell_color("checked in on time,early leave 5 min"), Some(Color::Yellow));
    }

    #[test]
    fn test_missing_checkout_marker_maps_to_red() {
        assert_eq!(cell_color("checked in on time,no check-out"), Some(Color::Red));
    }

    #[test]
    fn test_normal_and_blank_cells_are_unstyled() {
        assert_eq!(cell_color("ok"), None);
        assert_eq!(cell_color(""), None);
        assert_eq!(cell_color("checked in on time,checked out on time"), None);
    }

    #[test]
    fn test_marker_priority_follows_severity_order() {
        // A day both late and leaving early colors as late.
        assert_eq!(cell_color("late 10 min,early leave 5 min"), Some(Color::Green));
        // A late day with a missing check-out still colors as late.
        assert_eq!(cell_color("late 10 min,no check-out"), Some(Color::Green));
    }

    #[test]
    fn test_xlsx_report_is_written() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.xlsx");

        let writer = ReportWriter::new(ReportFormat::Xlsx, Some(path.clone()), "attendance_report.xlsx");
        writer.write(&sample_report()).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_csv_report_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        let writer = ReportWriter::new(ReportFormat::Csv, Some(path.clone()), "attendance_report.xlsx");
        writer.write(&sample_report()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "Employee,Department,Gender,2025-03-10");
        assert!(contents.contains("张三"));
        assert!(contents.contains("late 10 min"));
        assert!(contents.contains("absent"));
    }

    #[test]
    fn test_default_output_name_follows_format() {
        let writer = ReportWriter::new(ReportFormat::Csv, None, "attendance_report.xlsx");
        assert_eq!(writer.output_path().to_string_lossy(), "attendance_report.csv");

        let writer = ReportWriter::new(ReportFormat::Xlsx, None, "attendance_report.xlsx");
        assert_eq!(writer.output_path().to_string_lossy(), "attendance_report.xlsx");
    }
}
