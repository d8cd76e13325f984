use chrono::{Local, NaiveDate, NaiveTime};
use timetable::{OpeningHours, Timetable, Weekday};

fn main() -> Result<(), timetable::Error> {
    let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

    let mut library = Timetable::new(
        Weekday::ALL[..5]
            .iter()
            .map(|day| OpeningHours::new(*day, time(8, 30), time(20, 0))),
    )?;
    library.add_opening(OpeningHours::try_new("saturday", time(10, 0), time(16, 0))?)?;

    for (day, openings) in library.iter() {
        let hours: Vec<String> = openings.iter().map(ToString::to_string).collect();
        println!("{:<9} {}", day.format("%A")?, hours.join(", "));
    }
    println!("Open per week: {}", library.weekly_open_time());

    library.set_validity(
        NaiveDate::from_ymd_opt(2026, 7, 1),
        NaiveDate::from_ymd_opt(2026, 8, 31),
    );
    println!("Summer days: {:?}", library.active_days());
    println!("Open now: {}", library.is_open_at(Local::now().naive_local()));
    Ok(())
}
