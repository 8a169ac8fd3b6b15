//! Scenario tests for weekly schedule construction.

use super::*;
use crate::domain::{ScheduleTime, ServiceId, Stop, StopTime, TripId};
use crate::timetable::Cell;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn days(list: &[usize]) -> DaysOfWeek {
    let mut d = DaysOfWeek::none();
    for day in list {
        d.insert(*day);
    }
    d
}

/// Calls are (stop name, "HH:MM:SS")
fn trip(id: &str, service: &str, headsign: Option<&str>, calls: &[(&str, &str)]) -> Trip {
    Trip {
        id: TripId::new(id),
        route_id: RouteId::new("r1"),
        service_id: ServiceId::new(service),
        headsign: headsign.map(str::to_string),
        stop_times: calls
            .iter()
            .enumerate()
            .map(|(i, (name, time))| {
                let mut st = StopTime::new(Stop::new(*name, *name), i as u32);
                st.departure = Some(ScheduleTime::parse(time).unwrap());
                st
            })
            .collect(),
    }
}

fn outbound(id: &str, service: &str, start_hour: u32) -> Trip {
    let t = |m: u32| format!("{start_hour:02}:{m:02}:00");
    let (a, b, c) = (t(0), t(10), t(20));
    trip(
        id,
        service,
        Some("Harbour"),
        &[("Depot", &a), ("Market", &b), ("Harbour", &c)],
    )
}

fn inbound(id: &str, service: &str, start_hour: u32) -> Trip {
    let t = |m: u32| format!("{start_hour:02}:{m:02}:00");
    let (a, b, c) = (t(30), t(40), t(50));
    trip(
        id,
        service,
        Some("Depot"),
        &[("Harbour", &a), ("Market", &b), ("Depot", &c)],
    )
}

fn feed(trips: Vec<Trip>, services: Vec<ServicePeriod>) -> Feed {
    let mut route = Route::new("r1");
    route.short_name = Some("1".into());
    Feed {
        agencies: vec![Agency::new("metro", "Metro Transit")],
        routes: vec![route],
        trips,
        services,
    }
}

fn build(feed: &Feed) -> RouteSchedule {
    let services: Vec<&ServicePeriod> = feed.services.iter().collect();
    RouteSchedule::build(feed, &feed.routes[0], &services, &TimetableConfig::default()).unwrap()
}

fn labels(schedule: &RouteSchedule) -> Vec<&str> {
    schedule
        .service_days
        .iter()
        .map(|s| s.label.as_str())
        .collect()
}

#[test]
fn weekdays_consolidate_weekend_days_stay_apart() {
    let feed = feed(
        vec![
            outbound("wk1", "weekday", 7),
            outbound("wk2", "weekday", 8),
            outbound("sat1", "saturday", 9),
            outbound("sun1", "sunday", 10),
        ],
        vec![
            ServicePeriod::new("weekday", days(&[0, 1, 2, 3, 4])),
            ServicePeriod::new("saturday", days(&[5])),
            ServicePeriod::new("sunday", days(&[6])),
        ],
    );
    let schedule = build(&feed);

    assert_eq!(labels(&schedule), vec!["Mon - Fri", "Sat", "Sun"]);
    assert_eq!(schedule.service_days[0].slug, "MonFri");
    assert_eq!(schedule.service_days[0].days, days(&[0, 1, 2, 3, 4]));
    assert_eq!(
        schedule.service_days[0].directions[0].timetable.rows().len(),
        2
    );
}

#[test]
fn separate_calendars_with_identical_times_merge() {
    // Different service ids, same timetable: the days still consolidate
    let feed = feed(
        vec![outbound("sat1", "saturday", 9), outbound("sun1", "sunday", 9)],
        vec![
            ServicePeriod::new("saturday", days(&[5])),
            ServicePeriod::new("sunday", days(&[6])),
        ],
    );
    assert_eq!(labels(&build(&feed)), vec!["Sat - Sun"]);
}

#[test]
fn days_without_trips_are_left_out() {
    let feed = feed(
        vec![outbound("wk1", "weekday", 7)],
        vec![ServicePeriod::new("weekday", days(&[0, 1, 2, 3, 4]))],
    );
    let schedule = build(&feed);
    assert_eq!(labels(&schedule), vec!["Mon - Fri"]);
}

#[test]
fn no_trips_no_entries() {
    let feed = feed(
        Vec::new(),
        vec![ServicePeriod::new("weekday", days(&[0, 1, 2, 3, 4]))],
    );
    assert!(build(&feed).service_days.is_empty());
}

#[test]
fn non_contiguous_days() {
    let feed = feed(
        vec![outbound("mwf", "mwf", 7), outbound("tt", "tt", 8)],
        vec![
            ServicePeriod::new("mwf", days(&[0, 2, 4])),
            ServicePeriod::new("tt", days(&[1, 3])),
        ],
    );
    assert_eq!(labels(&build(&feed)), vec!["Mon, Wed, Fri", "Tue, Thu"]);
}

#[test]
fn wildcard_service_runs_every_day() {
    let feed = feed(
        vec![outbound("daily", "special", 6), outbound("wk1", "weekday", 7)],
        vec![
            ServicePeriod::new("special", DaysOfWeek::none()),
            ServicePeriod::new("weekday", days(&[0, 1, 2, 3, 4])),
        ],
    );
    let schedule = build(&feed);
    assert_eq!(labels(&schedule), vec!["Mon - Fri", "Sat - Sun"]);
    assert_eq!(
        schedule.service_days[0].directions[0].timetable.trips(),
        &[TripId::new("daily"), TripId::new("wk1")]
    );
    assert_eq!(
        schedule.service_days[1].directions[0].timetable.trips(),
        &[TripId::new("daily")]
    );
}

#[test]
fn directions_are_separated_and_sorted() {
    let feed = feed(
        vec![
            outbound("out1", "daily", 7),
            inbound("in1", "daily", 7),
            outbound("out2", "daily", 8),
        ],
        vec![ServicePeriod::new("daily", DaysOfWeek::all())],
    );
    let schedule = build(&feed);
    assert_eq!(labels(&schedule), vec!["Mon - Sun"]);

    let directions = &schedule.service_days[0].directions;
    let direction_labels: Vec<&str> = directions.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(direction_labels, vec!["Depot", "Harbour"]);

    let inbound = &directions[0].timetable;
    let header: Vec<&str> = inbound.header().iter().map(Stop::normalized_name).collect();
    assert_eq!(header, vec!["Harbour", "Market", "Depot"]);
    assert_eq!(inbound.rows().len(), 1);

    let outbound = &directions[1].timetable;
    assert_eq!(
        outbound.trips(),
        &[TripId::new("out1"), TripId::new("out2")]
    );
}

#[test]
fn short_turn_on_weekends_splits_days() {
    let mut short = trip(
        "sat-short",
        "weekend",
        Some("Harbour"),
        &[("Market", "07:10:00"), ("Harbour", "07:20:00")],
    );
    short.stop_times[0].stop = Stop::new("market-2", "Market ");
    let feed = feed(
        vec![outbound("wk1", "weekday", 7), short],
        vec![
            ServicePeriod::new("weekday", days(&[0, 1, 2, 3, 4])),
            ServicePeriod::new("weekend", days(&[5, 6])),
        ],
    );
    let schedule = build(&feed);
    assert_eq!(labels(&schedule), vec!["Mon - Fri", "Sat - Sun"]);

    let weekend = &schedule.service_days[1].directions[0].timetable;
    assert_eq!(weekend.header().len(), 2);
    assert_eq!(
        weekend.rows()[0],
        vec![
            Cell::Time(ScheduleTime::from_hms(7, 10, 0)),
            Cell::Time(ScheduleTime::from_hms(7, 20, 0))
        ]
    );
}

#[test]
fn trips_without_stop_times_are_skipped() {
    let mut empty = outbound("empty", "daily", 5);
    empty.stop_times.clear();
    let feed = feed(
        vec![empty, outbound("real", "daily", 7)],
        vec![ServicePeriod::new("daily", DaysOfWeek::all())],
    );
    let schedule = build(&feed);
    assert_eq!(schedule.service_days.len(), 1);
    let directions = &schedule.service_days[0].directions;
    assert_eq!(directions.len(), 1);
    assert_eq!(directions[0].timetable.trips(), &[TripId::new("real")]);
}

#[test]
fn other_routes_trips_are_ignored() {
    let mut foreign = outbound("other", "daily", 9);
    foreign.route_id = RouteId::new("r2");
    let feed = feed(
        vec![foreign, outbound("mine", "daily", 7)],
        vec![ServicePeriod::new("daily", DaysOfWeek::all())],
    );
    let schedule = build(&feed);
    assert_eq!(
        schedule.service_days[0].directions[0].timetable.trips(),
        &[TripId::new("mine")]
    );
}

#[test]
fn agency_is_resolved() {
    let feed = feed(
        vec![outbound("a", "daily", 7)],
        vec![ServicePeriod::new("daily", DaysOfWeek::all())],
    );
    let schedule = build(&feed);
    assert_eq!(schedule.agency.unwrap().name, "Metro Transit");
    assert_eq!(schedule.route.display_name(), "1");
}

#[test]
fn build_schedules_uses_effective_services() {
    let mut summer = ServicePeriod::new("summer", DaysOfWeek::all());
    summer.validity = Some((date(2024, 6, 1), date(2024, 8, 31)));
    let mut winter = ServicePeriod::new("winter", days(&[0, 1, 2, 3, 4]));
    winter.validity = Some((date(2024, 12, 1), date(2025, 2, 28)));
    let feed = feed(
        vec![outbound("s1", "summer", 7), outbound("w1", "winter", 8)],
        vec![summer, winter],
    );

    let schedules = build_schedules(&feed, date(2024, 7, 4), &TimetableConfig::default());
    assert_eq!(schedules.len(), 1);
    let (route_id, result) = &schedules[0];
    assert_eq!(route_id, &RouteId::new("r1"));
    let schedule = result.as_ref().unwrap();
    assert_eq!(labels(schedule), vec!["Mon - Sun"]);
    assert_eq!(
        schedule.service_days[0].directions[0].timetable.trips(),
        &[TripId::new("s1")]
    );
}

#[test]
fn build_schedules_skips_when_nothing_runs() {
    let mut summer = ServicePeriod::new("summer", DaysOfWeek::all());
    summer.validity = Some((date(2024, 6, 1), date(2024, 8, 31)));
    let feed = feed(vec![outbound("s1", "summer", 7)], vec![summer]);

    assert!(build_schedules(&feed, date(2024, 1, 1), &TimetableConfig::default()).is_empty());
}

#[test]
fn serialized_shape() {
    let feed = feed(
        vec![outbound("a", "daily", 7)],
        vec![ServicePeriod::new("daily", DaysOfWeek::all())],
    );
    let json = serde_json::to_value(build(&feed)).unwrap();
    let entry = &json["service_days"][0];
    assert_eq!(entry["label"], "Mon - Sun");
    assert_eq!(entry["slug"], "MonSun");
    let direction = &entry["directions"][0];
    assert_eq!(direction["label"], "Harbour");
    assert_eq!(direction["timetable"]["header"][0]["name"], "Depot");
    assert_eq!(direction["timetable"]["rows"][0][0]["time"], 7 * 3600);
}
