use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["parkwise"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_search_with_explicit_context() {
    let cli = Cli::try_parse_from([
        "parkwise", "search", "--lat", "23.2599", "--lng", "77.4126", "--day", "6", "--hour",
        "14", "--weekend",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Search {
            lat,
            lng,
            day,
            hour,
            weekend,
        }) => {
            assert_eq!(lat, Some(23.2599));
            assert_eq!(lng, Some(77.4126));
            assert_eq!(day, Some(6));
            assert_eq!(hour, Some(14));
            assert_eq!(weekend, Some(true));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn search_without_coordinates_is_accepted() {
    let cli = Cli::try_parse_from(["parkwise", "search"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            lat: None,
            lng: None,
            weekend: None,
            ..
        })
    ));
}

#[test]
fn search_latitude_requires_longitude() {
    assert!(Cli::try_parse_from(["parkwise", "search", "--lat", "23.2599"]).is_err());
}

#[test]
fn weekend_flag_accepts_explicit_false() {
    let cli = Cli::try_parse_from(["parkwise", "search", "--weekend", "false"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            weekend: Some(false),
            ..
        })
    ));
}

#[test]
fn query_accepts_negative_coordinates_and_default_radius() {
    let cli = Cli::try_parse_from(["parkwise", "query", "--lat", "-33.86", "--lng", "151.2"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Query { lat, lng, radius_m }) => {
            assert!((lat + 33.86).abs() < f64::EPSILON);
            assert!((lng - 151.2).abs() < f64::EPSILON);
            assert_eq!(radius_m, 3_000);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn build_context_derives_weekend_from_day() {
    let ctx = build_context(Some(5), Some(10), None).unwrap();
    assert!(ctx.is_weekend);
    let ctx = build_context(Some(4), Some(10), None).unwrap();
    assert!(!ctx.is_weekend);
}

#[test]
fn build_context_keeps_explicit_weekend_flag() {
    let ctx = build_context(Some(6), Some(10), Some(false)).unwrap();
    assert!(!ctx.is_weekend);
}

#[test]
fn build_context_rejects_invalid_hour() {
    assert!(build_context(Some(1), Some(24), None).is_err());
}

#[test]
fn build_context_defaults_are_in_range() {
    let ctx = build_context(None, None, None).unwrap();
    assert!(ctx.day_of_week <= 6);
    assert!(ctx.hour <= 23);
}
