use chrono::{Local, NaiveDate, Utc};
use clap::Subcommand;
use waketrainer_core::storage::Config;
use waketrainer_core::Event;

#[derive(Subcommand)]
pub enum JourneyAction {
    /// Print the journey state as JSON
    Status,
    /// Print the day-by-day wake-up plan
    Plan {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Start the journey from the current wake-time settings
    Start {
        /// Start date (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Re-assign the current wake time to the next wake-up
    Advance,
    /// Clear the journey start date
    Reset,
}

pub fn run(action: JourneyAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;
    let schedule = config.schedule();

    match action {
        JourneyAction::Status => {
            let mut status = serde_json::to_value(schedule.snapshot())?;
            if let Some(journey) = config.journey() {
                let today = Local::now().date_naive();
                let obj = status
                    .as_object_mut()
                    .ok_or("snapshot did not serialize to an object")?;
                obj.insert("started_on".into(), serde_json::to_value(journey.started_on())?);
                obj.insert("day_index".into(), journey.day_index(today).into());
                obj.insert("remaining_days".into(), journey.remaining_days(today).into());
                obj.insert(
                    "wake_time_today".into(),
                    serde_json::to_value(journey.wake_time_on(today))?,
                );
            }
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        JourneyAction::Plan { json } => {
            let plan = schedule.plan();
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                for (day, time) in plan.iter().enumerate() {
                    println!("day {day:>3}  {time}");
                }
            }
        }
        JourneyAction::Start { on } => {
            let started_on = on.unwrap_or_else(|| Local::now().date_naive());
            config.journey.started_on = Some(started_on);
            config.save()?;
            let event = Event::JourneyStarted {
                started_on,
                current: schedule.current(),
                target: schedule.target(),
                days_needed: schedule.days_needed(),
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        JourneyAction::Advance => {
            let event = if schedule.is_target_reached() {
                Event::TargetReached {
                    target: schedule.target(),
                    at: Utc::now(),
                }
            } else {
                let advanced = schedule.advanced();
                config.wake.current = advanced.current();
                config.save()?;
                if advanced.is_target_reached() {
                    Event::TargetReached {
                        target: advanced.target(),
                        at: Utc::now(),
                    }
                } else {
                    Event::WakeTimeAdvanced {
                        previous: schedule.current(),
                        current: advanced.current(),
                        next_wake_up: advanced.next_wake_up(),
                        remaining_days: advanced.days_needed(),
                        at: Utc::now(),
                    }
                }
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        JourneyAction::Reset => {
            config.journey.started_on = None;
            config.save()?;
            let event = Event::JourneyReset { at: Utc::now() };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}
