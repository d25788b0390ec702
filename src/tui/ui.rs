// UI rendering logic
//
// Called once per frame. Computes the screen layout, stores it on the App
// for mouse hit-testing, then draws each component into its rect.

use super::app::App;
use super::components::{carousel_panel, logs_panel, status_bar, title_bar};
use super::layout::ScreenLayout;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    app.layout = ScreenLayout::compute(f.area(), app.carousel.slide_count(), app.show_logs);

    title_bar::render(f, app.layout.title, app);
    carousel_panel::render(f, app);
    status_bar::render(f, app.layout.status, app);

    if let Some(area) = app.layout.logs {
        logs_panel::render(f, area, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{
        Carousel, CarouselOptions, FixedMotionPreference, ManualClock, Slide, SlideDeck,
    };
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(slides: Vec<Slide>) -> String {
        let clock = ManualClock::new();
        let carousel = Carousel::mount(
            SlideDeck::new(slides).unwrap(),
            CarouselOptions::default(),
            Box::new(clock),
            Some(&FixedMotionPreference(false)),
        )
        .unwrap();
        let mut app = App::new(carousel, LogBuffer::new(), &Config::default());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn draws_current_slide_and_chrome() {
        let text = render(vec![
            Slide::new("1", "one.png", "First banner"),
            Slide::new("2", "two.png", "Second banner"),
        ]);
        assert!(text.contains("Featured courses"));
        assert!(text.contains("First banner"));
        assert!(!text.contains("Second banner"));
        assert!(text.contains("Slide 1 of 2"));
        assert!(text.contains("slide 1/2 First banner"));
        assert!(text.contains("RUNNING"));
        assert!(text.contains("●"));
    }

    #[test]
    fn draws_placeholder_for_empty_deck() {
        let text = render(Vec::new());
        assert!(text.contains("No banners to show"));
        assert!(text.contains("no slides"));
    }
}
