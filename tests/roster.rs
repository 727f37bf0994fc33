#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use rekap::libs::roster::{build_report, reconcile_day, AbsenceRegister, AbsenceRow, OaRow};
    use rekap::libs::status::DayStatus;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn dt(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    fn time(hour: u32, min: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(hour, min, 0)
    }

    fn oa_row(name: &str, day: u32, shift: &str, checkin: Option<NaiveTime>, checkout: Option<NaiveTime>) -> OaRow {
        OaRow {
            name: name.to_string(),
            department: "Engineering".to_string(),
            gender: "F".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            shift_label: shift.to_string(),
            checkin,
            checkout,
        }
    }

    fn absence_row(name: &str, from: NaiveDateTime, to: NaiveDateTime) -> AbsenceRow {
        AbsenceRow {
            name: name.to_string(),
            from,
            to,
        }
    }

    #[test]
    fn test_morning_absence_shifts_window_and_grades_late_checkin() {
        // Shift 09:00-18:00 with a 09:00-10:00 absence: the effective
        // window becomes 10:00-18:00, so a 10:05 check-in is 5 min late.
        let register = AbsenceRegister::from_rows(vec![absence_row("张三", dt(10, 9, 0), dt(10, 10, 0))]);
        let row = oa_row("张三", 10, "09:00-18:00", time(10, 5), time(18, 0));

        let status = reconcile_day(&row, register.for_employee("张三")).unwrap().unwrap();
        let description = status.to_string();
        assert!(description.contains("late 5 min"));
        assert!(status.is_flagged());
    }

    #[test]
    fn test_no_absences_passes_nominal_window_through() {
        let register = AbsenceRegister::default();
        let row = oa_row("张三", 10, "09:00-18:00", time(8, 58), time(18, 2));

        let status = reconcile_day(&row, register.for_employee("张三")).unwrap().unwrap();
        assert_eq!(status, DayStatus::Normal);
    }

    #[test]
    fn test_full_day_absence_is_reported_absent() {
        let register = AbsenceRegister::from_rows(vec![absence_row("张三", dt(10, 8, 0), dt(10, 19, 0))]);
        let row = oa_row("张三", 10, "09:00-18:00", None, None);

        let status = reconcile_day(&row, register.for_employee("张三")).unwrap().unwrap();
        assert_eq!(status, DayStatus::Absent);
    }

    #[test]
    fn test_sentinel_shift_produces_no_record() {
        let row = oa_row("张三", 10, "(-)", None, None);
        assert_eq!(reconcile_day(&row, &[]).unwrap(), None);
    }

    #[test]
    fn test_malformed_shift_label_is_an_error() {
        let row = oa_row("张三", 10, "whenever", None, None);
        assert!(reconcile_day(&row, &[]).is_err());
    }

    #[test]
    fn test_register_joins_on_normalized_names() {
        // OA pads the CJK name; HR appends a transliteration. Both sides
        // must land on the same key.
        let register = AbsenceRegister::from_rows(vec![absence_row("张三 Zhang San", dt(10, 9, 0), dt(10, 10, 0))]);
        assert_eq!(register.for_employee("张三").len(), 1);
        assert!(register.for_employee("张三 Zhang San").is_empty());
    }

    #[test]
    fn test_register_drops_inverted_intervals() {
        let register = AbsenceRegister::from_rows(vec![absence_row("张三", dt(10, 12, 0), dt(10, 9, 0))]);
        assert!(register.for_employee("张三").is_empty());
    }

    #[test]
    fn test_register_merges_split_records() {
        let register = AbsenceRegister::from_rows(vec![
            absence_row("张三", dt(10, 13, 0), dt(10, 15, 0)),
            absence_row("张三", dt(10, 9, 0), dt(10, 13, 0)),
        ]);
        let intervals = register.for_employee("张三");
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].from, dt(10, 9, 0));
        assert_eq!(intervals[0].to, dt(10, 15, 0));
    }

    #[test]
    fn test_build_report_end_to_end() {
        let oa_rows = vec![
            oa_row("张 三", 10, "09:00-18:00", time(10, 5), time(18, 0)),
            oa_row("张 三", 11, "09:00-18:00", time(8, 55), time(18, 0)),
            oa_row("李四", 10, "09:00-18:00", None, None),
        ];
        let register = AbsenceRegister::from_rows(vec![absence_row("张三 Zhang San", dt(10, 9, 0), dt(10, 10, 0))]);

        let report = build_report(&oa_rows, &register);

        assert_eq!(report.employees.len(), 2);
        assert_eq!(report.dates, vec![date(), NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()]);

        // 张三: late on the 10th after the absence shift, normal on the 11th.
        assert!(report.cell("张三", date()).unwrap().contains("late 5 min"));
        assert_eq!(report.cell("张三", NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()).unwrap(), "ok");

        // 李四 punched neither side: a no-show.
        assert_eq!(report.cell("李四", date()).unwrap(), "absent");

        // Two flagged cells: the late day and the no-show.
        assert_eq!(report.flagged, 2);
    }

    #[test]
    fn test_build_report_keeps_date_columns_from_sentinel_rows() {
        // The original export lists every date, even days nobody had a
        // shift; those columns survive with no cells.
        let oa_rows = vec![
            oa_row("张三", 10, "(-)", None, None),
            oa_row("张三", 11, "09:00-18:00", time(9, 0), time(18, 0)),
        ];
        let report = build_report(&oa_rows, &AbsenceRegister::default());

        assert_eq!(report.dates.len(), 2);
        assert!(report.cell("张三", date()).is_none());
        assert_eq!(report.cell("张三", NaiveDate::from_ymd_opt(2025, 3, 11).unwrap()).unwrap(), "ok");
    }

    #[test]
    fn test_build_report_skips_malformed_shift_rows() {
        let oa_rows = vec![oa_row("张三", 10, "whenever", time(9, 0), time(18, 0))];
        let report = build_report(&oa_rows, &AbsenceRegister::default());
        assert!(report.is_empty());
        assert_eq!(report.dates.len(), 1);
    }

    #[test]
    fn test_duplicate_employee_day_keeps_last_row() {
        let oa_rows = vec![
            oa_row("张三", 10, "09:00-18:00", None, None),
            oa_row("张三", 10, "09:00-18:00", time(9, 0), time(18, 0)),
        ];
        let report = build_report(&oa_rows, &AbsenceRegister::default());
        assert_eq!(report.cell("张三", date()).unwrap(), "ok");
    }

    #[test]
    fn test_employee_rows_keep_first_seen_order() {
        let oa_rows = vec![
            oa_row("王五", 10, "09:00-18:00", time(9, 0), time(18, 0)),
            oa_row("张三", 10, "09:00-18:00", time(9, 0), time(18, 0)),
            oa_row("王五", 11, "09:00-18:00", time(9, 0), time(18, 0)),
        ];
        let report = build_report(&oa_rows, &AbsenceRegister::default());
        let names: Vec<_> = report.employees.iter().map(|record| record.name.as_str()).collect();
        assert_eq!(names, vec!["王五", "张三"]);
    }
}
