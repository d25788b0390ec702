// Simulation mode: replay scripted sessions on simulated time
//
// Each scenario mounts a carousel on a ManualClock, then walks a list of
// timestamped user actions. Between actions the clock jumps straight to each
// armed deadline so timer fires land on their exact instant. The resulting
// timeline is printed as text or as JSON lines.
//
// Run with: banner-carousel simulate --scenario all --json

use crate::carousel::{
    Carousel, CarouselOptions, CarouselSnapshot, Direction, FixedMotionPreference, Key,
    ManualClock, Slide, SlideDeck,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// A user action in a scripted session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Arrow { next: bool },
    Dot { index: usize },
    Swipe { start_x: f64, end_x: f64 },
    Key { right: bool },
    HoverStart,
    HoverEnd,
    Unmount,
}

impl Action {
    fn label(&self) -> String {
        match self {
            Action::Arrow { next: true } => "click next arrow".to_string(),
            Action::Arrow { next: false } => "click previous arrow".to_string(),
            Action::Dot { index } => format!("click dot {}", index + 1),
            Action::Swipe { start_x, end_x } => format!("swipe {} -> {}", start_x, end_x),
            Action::Key { right: true } => "press ArrowRight".to_string(),
            Action::Key { right: false } => "press ArrowLeft".to_string(),
            Action::HoverStart => "pointer enters".to_string(),
            Action::HoverEnd => "pointer leaves".to_string(),
            Action::Unmount => "unmount".to_string(),
        }
    }

    fn apply(&self, carousel: &mut Carousel) {
        match *self {
            Action::Arrow { next } => carousel.on_arrow_click(if next {
                Direction::Next
            } else {
                Direction::Prev
            }),
            Action::Dot { index } => carousel.on_dot_select(index),
            Action::Swipe { start_x, end_x } => carousel.on_pointer_sequence(start_x, end_x),
            Action::Key { right } => {
                carousel.on_key_down(if right { Key::ArrowRight } else { Key::ArrowLeft });
            }
            Action::HoverStart => carousel.on_mouse_enter(),
            Action::HoverEnd => carousel.on_mouse_leave(),
            Action::Unmount => carousel.unmount(),
        }
    }
}

/// A named, scripted session
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub slides: usize,
    /// (milliseconds since mount, action)
    pub script: Vec<(u64, Action)>,
    /// Simulation stops here
    pub until_ms: u64,
}

/// Built-in scenarios
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "arrow-cooldown",
            description: "Auto-advance, arrow click, 30s cooldown, resume with wrap",
            slides: 3,
            script: vec![(10_050, Action::Arrow { next: true })],
            until_ms: 55_000,
        },
        Scenario {
            name: "hover-cooldown",
            description: "Hover pauses rotation; leaving resumes after the remaining cooldown",
            slides: 3,
            script: vec![
                (5_000, Action::Dot { index: 2 }),
                (10_000, Action::HoverStart),
                (20_000, Action::HoverEnd),
            ],
            until_ms: 50_000,
        },
        Scenario {
            name: "swipe",
            description: "Short drags are ignored, long drags navigate",
            slides: 4,
            script: vec![
                (1_000, Action::Swipe { start_x: 200.0, end_x: 151.0 }),
                (2_000, Action::Swipe { start_x: 200.0, end_x: 149.0 }),
                (3_000, Action::Swipe { start_x: 100.0, end_x: 260.0 }),
                (4_000, Action::Key { right: false }),
            ],
            until_ms: 45_000,
        },
        Scenario {
            name: "teardown",
            description: "Unmount mid-cooldown; nothing fires afterwards",
            slides: 3,
            script: vec![
                (2_000, Action::Arrow { next: false }),
                (12_000, Action::Unmount),
            ],
            until_ms: 60_000,
        },
    ]
}

/// Look up a scenario by name ("all" returns every scenario)
pub fn select(name: &str) -> Option<Vec<Scenario>> {
    if name == "all" {
        return Some(scenarios());
    }
    scenarios()
        .into_iter()
        .find(|s| s.name == name)
        .map(|s| vec![s])
}

/// One line of the timeline
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub scenario: &'static str,
    pub at_ms: u64,
    pub event: String,
    pub snapshot: CarouselSnapshot,
}

fn sample_deck(n: usize) -> Result<SlideDeck> {
    let slides = (1..=n)
        .map(|i| Slide::new(i.to_string(), format!("assets/banner{i}.png"), format!("Banner {i}")))
        .collect();
    SlideDeck::new(slides).context("Failed to build sample deck")
}

fn millis(d: Duration) -> u64 {
    d.as_millis().min(u64::MAX as u128) as u64
}

/// Run one scenario and return its timeline
pub fn run(scenario: &Scenario, options: CarouselOptions) -> Result<Vec<TimelineEntry>> {
    let clock = ManualClock::new();
    let mut carousel = Carousel::mount(
        sample_deck(scenario.slides)?,
        options,
        Box::new(clock.clone()),
        Some(&FixedMotionPreference(false)),
    )
    .context("Failed to mount carousel")?;

    let mut timeline = Vec::new();
    let mut record = |event: String, carousel: &Carousel, clock: &ManualClock| {
        timeline.push(TimelineEntry {
            scenario: scenario.name,
            at_ms: millis(clock.elapsed()),
            event,
            snapshot: carousel.snapshot(),
        });
    };

    record("mount".to_string(), &carousel, &clock);

    let mut script = scenario.script.clone();
    script.sort_by_key(|(at, _)| *at);
    let mut actions = script.into_iter().peekable();

    loop {
        let next_action_at = actions.peek().map(|(at, _)| *at);
        let next_timer_at = carousel
            .next_deadline()
            .map(|deadline| millis(deadline.saturating_duration_since(clock.origin())));

        // Timers win ties: a fire scheduled for the same instant happened first
        let (at, is_timer) = match (next_timer_at, next_action_at) {
            (Some(t), Some(a)) if t <= a => (t, true),
            (_, Some(a)) => (a, false),
            (Some(t), None) => (t, true),
            (None, None) => break,
        };
        if at > scenario.until_ms {
            break;
        }

        clock.set_elapsed(Duration::from_millis(at));
        if is_timer {
            let kind = carousel.armed_timer().map(|t| t.kind.as_str()).unwrap_or("timer");
            let advanced = carousel.poll();
            let event = if advanced {
                format!("{} timer fires, advance", kind)
            } else {
                format!("{} timer fires", kind)
            };
            record(event, &carousel, &clock);
        } else if let Some((_, action)) = actions.next() {
            action.apply(&mut carousel);
            record(action.label(), &carousel, &clock);
        }
    }

    clock.set_elapsed(Duration::from_millis(scenario.until_ms));
    record("end".to_string(), &carousel, &clock);
    Ok(timeline)
}

/// Run scenarios and print their timelines to stdout
pub fn print(scenarios: &[Scenario], options: CarouselOptions, json: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for scenario in scenarios {
        let timeline = run(scenario, options)?;
        if json {
            for entry in &timeline {
                writeln!(out, "{}", serde_json::to_string(entry)?)?;
            }
            continue;
        }

        writeln!(out, "\n▸ {} ({})", scenario.name, scenario.description)?;
        for entry in &timeline {
            let s = &entry.snapshot;
            let timer = match (s.armed, s.due_in_ms) {
                (Some(kind), Some(due)) => format!("{} in {}ms", kind.as_str(), due),
                _ => "no timer".to_string(),
            };
            writeln!(
                out,
                "  t={:>6}ms  {:<32} slide {}/{}  {:<15} {}",
                entry.at_ms,
                entry.event,
                s.index + 1,
                s.slide_count,
                s.state.as_str(),
                timer
            )?;
        }
    }
    Ok(())
}
