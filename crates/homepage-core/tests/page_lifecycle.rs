//! End-to-end page behavior: startup wiring, user gestures and timers.

use std::time::Duration;

use homepage_core::audio::{RAMP_INTERVAL, RAMP_STEPS, VOLUME_TARGET};
use homepage_core::{
    fade_in, run_clock, startup, ClockReading, ContactForm, NotificationLevel, PageView, Pointer,
    SiteConfig, VolumeRamp, Wiring, TICK_INTERVAL,
};
use tokio::time::{timeout, Instant};

fn page_without(strip: impl FnOnce(&mut SiteConfig)) -> PageView {
    let mut config = SiteConfig::default();
    strip(&mut config);
    PageView::from_config(&config)
}

// ============================================================================
// Startup
// ============================================================================

#[test]
fn missing_components_do_not_affect_others() {
    let mut page = page_without(|c| {
        c.audio = None;
        c.contact_form = false;
    });
    let report = startup(&mut page, &ClockReading::now());

    assert_eq!(report.music_player, Wiring::Absent);
    assert_eq!(report.contact_form, Wiring::Absent);
    assert_eq!(report.clock, Wiring::Attached);
    assert_eq!(report.gallery_hover, Wiring::Attached);
    assert_eq!(report.family_cards, Wiring::Attached);
    assert_eq!(report.profile_image, Wiring::Attached);
}

#[test]
fn startup_sets_default_volume() {
    let mut page = PageView::from_config(&SiteConfig::default());
    startup(&mut page, &ClockReading::now());
    assert_eq!(page.music.primary().unwrap().volume, VOLUME_TARGET);
}

#[test]
fn clock_without_widget_renders_nothing() {
    let mut page = page_without(|c| c.clock = false);
    let report = startup(&mut page, &ClockReading::now());
    assert_eq!(report.clock, Wiring::Absent);
    assert_eq!(page.clock.time, None);
}

#[test]
fn date_slot_has_weekday_month_day_year() {
    let mut page = PageView::from_config(&SiteConfig::default());
    startup(&mut page, &ClockReading::now());

    let date = page.clock.date.unwrap();
    let (weekday, rest) = date.split_once(", ").unwrap();
    assert!(weekday.ends_with("day"));
    let (month_day, year) = rest.rsplit_once(", ").unwrap();
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
    let (month, day) = month_day.split_once(' ').unwrap();
    assert!(month.chars().all(|c| c.is_ascii_alphabetic()));
    assert!(day.parse::<u32>().is_ok());
}

// ============================================================================
// Gestures
// ============================================================================

#[test]
fn gallery_filter_then_hover() {
    let mut page = PageView::from_config(&SiteConfig::default());
    startup(&mut page, &ClockReading::now());

    page.gallery.filter("nature");
    let visible: Vec<_> = page.gallery.visible_items().map(|i| i.title.as_str()).collect();
    assert_eq!(visible, vec!["Autumn Forest", "Wildflowers"]);

    page.gallery.hover_item(3, Pointer::Enter);
    assert_eq!(page.gallery.items[3].style.transform, Some("scale(1.05)"));
    page.gallery.hover_item(3, Pointer::Leave);
    assert_eq!(page.gallery.items[3].style.transform, Some("scale(1)"));
}

#[test]
fn contact_form_warning_then_success() {
    let mut page = PageView::from_config(&SiteConfig::default());
    startup(&mut page, &ClockReading::now());

    page.contact = Some(ContactForm::new("Ana", "", "Hi", "Hello"));
    let warning = page.submit_contact().unwrap();
    assert_eq!(warning.level, NotificationLevel::Warning);
    assert_eq!(page.contact, Some(ContactForm::new("Ana", "", "Hi", "Hello")));

    if let Some(form) = page.contact.as_mut() {
        form.email = "ana@example.com".to_string();
    }
    let info = page.submit_contact().unwrap();
    assert_eq!(info.level, NotificationLevel::Info);
    assert!(info.text.contains("ana@example.com"));
    assert_eq!(page.contact, Some(ContactForm::default()));
}

#[test]
fn profile_hover_enter_leave() {
    let mut page = PageView::from_config(&SiteConfig::default());
    page.hover_profile_image(Pointer::Enter);
    page.hover_profile_image(Pointer::Leave);
    let style = &page.profile_image.as_ref().unwrap().style;
    assert_eq!(style.transform, Some("scale(1) rotate(0deg)"));
}

// ============================================================================
// Audio ramp timing
// ============================================================================

#[tokio::test(start_paused = true)]
async fn fade_in_steps_every_interval_until_target() {
    let mut page = PageView::from_config(&SiteConfig::default());
    startup(&mut page, &ClockReading::now());
    assert!(page.music.on_data_loaded());
    assert_eq!(page.music.primary().unwrap().volume, 0.0);

    let start = Instant::now();
    let mut seen = Vec::new();
    let applied = fade_in(|| {
        let volume = page.music.tick();
        if let Some(v) = volume {
            seen.push((start.elapsed(), v));
        }
        volume
    })
    .await;

    assert_eq!(applied, RAMP_STEPS);
    for (i, (elapsed, volume)) in seen.iter().enumerate() {
        let step = i as u32 + 1;
        assert_eq!(*elapsed, RAMP_INTERVAL * step);
        assert!((volume - 0.05 * f64::from(step)).abs() < 1e-9);
    }

    let element = page.music.primary().unwrap();
    assert_eq!(element.volume, VOLUME_TARGET);
    assert_eq!(element.ramp, VolumeRamp::Done);
}

#[tokio::test(start_paused = true)]
async fn fade_in_without_load_stops_after_one_interval() {
    let mut page = PageView::from_config(&SiteConfig::default());
    startup(&mut page, &ClockReading::now());

    let start = Instant::now();
    let applied = fade_in(|| page.music.tick()).await;
    assert_eq!(applied, 0);
    assert_eq!(start.elapsed(), Duration::from_millis(100));
    assert_eq!(page.music.primary().unwrap().volume, VOLUME_TARGET);
}

// ============================================================================
// Clock ticker
// ============================================================================

#[tokio::test(start_paused = true)]
async fn clock_rerenders_every_second_without_stopping() {
    let mut page = PageView::from_config(&SiteConfig::default());
    startup(&mut page, &ClockReading::now());

    let start = Instant::now();
    let mut renders = Vec::new();
    let result = timeout(Duration::from_millis(3500), run_clock(|| {
        page.clock.render_now();
        renders.push(start.elapsed());
    }))
    .await;

    // Still running when the observation window closes
    assert!(result.is_err());
    assert_eq!(
        renders,
        vec![TICK_INTERVAL, TICK_INTERVAL * 2, TICK_INTERVAL * 3]
    );
    assert!(page.clock.time.is_some());
}
