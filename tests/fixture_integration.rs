use booking_testdata::{FixedClock, TestDataLoader};
use chrono::NaiveDate;

fn fixed_loader() -> TestDataLoader<FixedClock> {
    // Friday 2025-09-19
    let today = NaiveDate::from_ymd_opt(2025, 9, 19).expect("valid date");
    TestDataLoader::with_clock(FixedClock::new(today))
}

#[test]
fn test_booking_fixture_end_to_end() {
    let loader = fixed_loader();

    let json = r#"[
        {
            "destination": "Lisbon",
            "checkInDate": "<NEXT_FRIDAY>",
            "checkOutDate": "<PLUS_3_DAYS>",
            "guests": 2,
            "roomType": "double"
        },
        {
            "destination": "Tokyo",
            "checkInDate": "<FIRST_DAY_OF_NEXT_MONTH>",
            "checkOutDate": "<NEXT_FROM_CHECK_IN_DATE_7_DAY>"
        },
        {
            "destination": "Oslo",
            "checkInDate": "2025-12-24",
            "checkOutDate": "<PLUS_2_DAYS>"
        }
    ]"#;

    let records = loader.load_str(json).expect("Failed to load fixture");

    assert_eq!(records.len(), 3);

    // Placeholder check-in with an offset check-out
    assert_eq!(records[0].check_in_date, "2025-09-26");
    assert_eq!(records[0].check_out_date, "2025-09-29");
    assert_eq!(records[0].guests, Some(2));
    assert_eq!(
        records[0].extra.get("roomType").and_then(|v| v.as_str()),
        Some("double")
    );

    // Legacy compound form against the resolved check-in
    assert_eq!(records[1].check_in_date, "2025-10-01");
    assert_eq!(records[1].check_out_date, "2025-10-08");

    // Literal check-in feeding the reference chain
    assert_eq!(records[2].check_in_date, "2025-12-24");
    assert_eq!(records[2].check_out_date, "2025-12-26");

    for record in &records {
        println!(
            "{}: {} -> {}",
            record.destination.as_deref().unwrap_or("?"),
            record.check_in_date,
            record.check_out_date
        );
    }
}

#[test]
fn test_check_out_offset_independent_of_today() {
    // The check-out stays 3 days after check-in no matter when the suite runs
    for day in [1, 8, 15, 22, 29] {
        let today = NaiveDate::from_ymd_opt(2025, 9, day).expect("valid date");
        let loader = TestDataLoader::with_clock(FixedClock::new(today));

        let records = loader
            .load_str(r#"[{"checkInDate": "<NEXT_FRIDAY>", "checkOutDate": "<PLUS_3_DAYS>"}]"#)
            .expect("Failed to load fixture");

        let check_in = NaiveDate::parse_from_str(&records[0].check_in_date, "%Y-%m-%d")
            .expect("check-in is a date");
        let check_out = NaiveDate::parse_from_str(&records[0].check_out_date, "%Y-%m-%d")
            .expect("check-out is a date");

        assert_eq!((check_out - check_in).num_days(), 3);
        assert!(check_in > today, "check-in must be strictly in the future");
    }
}

#[test]
fn test_unknown_placeholder_aborts_load() {
    let loader = fixed_loader();

    let json = r#"[{"checkInDate": "<NEXT_BOOKING_WINDOW>", "checkOutDate": "<PLUS_3_DAYS>"}]"#;

    let err = loader.load_str(json).expect_err("load should fail");
    let message = err.to_string();

    assert!(message.contains("checkInDate"));
}

#[test]
fn test_fixture_file_round_trip() {
    let loader = fixed_loader();

    let path = std::env::temp_dir().join("booking_testdata_fixture_roundtrip.json");
    std::fs::write(
        &path,
        r#"[{"destination": "Porto", "checkInDate": "<NEXT_MONDAY>", "checkOutDate": "<PLUS_1_WEEKS>"}]"#,
    )
    .expect("Failed to write fixture file");

    let records = loader.load_path(&path).expect("Failed to load fixture file");
    std::fs::remove_file(&path).ok();

    assert_eq!(records.len(), 1);
    // Next Monday from Friday 2025-09-19, one-week buffer applied
    assert_eq!(records[0].check_in_date, "2025-09-29");
    assert_eq!(records[0].check_out_date, "2025-10-06");

    // Resolved records serialize back with the fixture field names
    let json = serde_json::to_string(&records).expect("Failed to serialize records");
    assert!(json.contains("checkInDate"));
    assert!(json.contains("2025-09-29"));
}
