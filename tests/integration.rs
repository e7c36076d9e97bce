// SPDX-License-Identifier: MPL-2.0
use folio::app::config::{self, Config};
use folio::content::Content;
use folio::gallery::{loader, AssetStatus, Input, SlideRecord, Slideshow};
use folio::i18n::fluent::I18n;
use folio::ui::theming::ThemeMode;
use image_rs::{Rgba, RgbaImage};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const INTERVAL: Duration = Duration::from_secs(5);

fn write_png(path: &Path) {
    RgbaImage::from_pixel(8, 6, Rgba([20, 120, 220, 255]))
        .save(path)
        .expect("write png");
}

/// Runs every pending load to completion, the way the app's tasks would.
async fn load_all(slideshow: &mut Slideshow, requests: Vec<folio::gallery::LoadRequest>, root: &Path) {
    for request in requests {
        let result = loader::load(request.source, root.to_path_buf()).await;
        slideshow.finish_load(request.key, result);
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-next"), "Next image");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-next"), "Image suivante");
}

#[test]
fn test_theme_preference_round_trips_through_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;
    config::save_to_path(&cfg, &config_path).expect("save");

    let loaded = config::load_from_path(&config_path).expect("load");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.autoplay_interval(), Config::default().autoplay_interval());
}

#[tokio::test]
async fn test_content_file_drives_slideshow_with_placeholders() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::create_dir(dir.path().join("photos")).expect("create photos dir");
    write_png(&dir.path().join("photos/1.png"));
    write_png(&dir.path().join("photos/2.png"));

    let content_path = dir.path().join("portfolio.toml");
    std::fs::write(
        &content_path,
        r#"
        [profile]
        name = "Ada"
        title = "Engineer"
        subtitle = "Hello there"

        [[gallery]]
        source = "photos/1.png"
        title = "First"
        description = "One"

        [[gallery]]
        source = "photos/2.png"
        title = "Second"
        description = "Two"

        [[gallery]]
        source = "photos/missing.png"
        title = "Third"
        description = "Three"
        "#,
    )
    .expect("write content");

    let content = Content::load_from_path(&content_path).expect("content loads");
    let now = Instant::now();
    let (mut slideshow, requests) = Slideshow::new(content.gallery.clone(), INTERVAL, now);
    assert_eq!(requests.len(), 3);

    load_all(&mut slideshow, requests, content.root()).await;

    assert!(matches!(slideshow.status(0), Some(AssetStatus::Ready(_))));
    assert!(matches!(slideshow.status(1), Some(AssetStatus::Ready(_))));
    assert!(matches!(slideshow.status(2), Some(AssetStatus::Failed)));

    let failed = slideshow
        .slides()
        .find_map(|slide| slide.placeholder)
        .expect("one placeholder");
    assert_eq!(failed.number, 3);
    assert_eq!(slideshow.placeholder_count(2), 1);

    // Caption stays with the slide even when its image failed.
    assert_eq!(slideshow.record(2).map(SlideRecord::title), Some("Third"));

    // Navigation wraps in both directions.
    slideshow.handle_input(Input::ArrowLeft, now);
    assert_eq!(slideshow.current_index(), 2);
    slideshow.handle_input(Input::ArrowRight, now);
    assert_eq!(slideshow.current_index(), 0);
}

#[tokio::test]
async fn test_auto_play_advances_and_pauses_on_hover() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["a.png", "b.png", "c.png"] {
        write_png(&dir.path().join(name));
    }
    let records = ["a.png", "b.png", "c.png"]
        .iter()
        .map(|source| SlideRecord::new(*source, "Photography", "A beautiful photo"))
        .collect();

    let start = Instant::now();
    let (mut slideshow, requests) = Slideshow::new(records, INTERVAL, start);
    load_all(&mut slideshow, requests, dir.path()).await;

    assert!(slideshow.tick(start + INTERVAL));
    assert_eq!(slideshow.current_index(), 1);

    slideshow.handle_input(Input::HoverEnter, start + INTERVAL);
    assert!(!slideshow.tick(start + INTERVAL * 3));
    assert_eq!(slideshow.current_index(), 1);

    let resumed = start + INTERVAL * 3;
    slideshow.handle_input(Input::HoverExit, resumed);
    assert!(!slideshow.tick(resumed + INTERVAL / 2));
    assert!(slideshow.tick(resumed + INTERVAL));
    assert_eq!(slideshow.current_index(), 2);
}

#[tokio::test]
async fn test_stale_loads_after_gallery_swap_are_ignored() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_png(&dir.path().join("old.png"));
    write_png(&dir.path().join("new.png"));

    let now = Instant::now();
    let (mut slideshow, stale) =
        Slideshow::new(vec![SlideRecord::new("old.png", "Old", "")], INTERVAL, now);

    let fresh = slideshow.update_gallery(
        vec![
            SlideRecord::new("new.png", "New", ""),
            SlideRecord::new("gone.png", "Gone", ""),
        ],
        now,
    );

    load_all(&mut slideshow, stale, dir.path()).await;
    assert!(matches!(slideshow.status(0), Some(AssetStatus::Pending)));

    load_all(&mut slideshow, fresh, dir.path()).await;
    assert!(matches!(slideshow.status(0), Some(AssetStatus::Ready(_))));
    assert!(matches!(slideshow.status(1), Some(AssetStatus::Failed)));
    assert_eq!(slideshow.current_index(), 0);
}

#[test]
fn test_destroyed_slideshow_ignores_input() {
    let now = Instant::now();
    let (mut slideshow, _) = Slideshow::new(
        vec![
            SlideRecord::new("a.png", "A", ""),
            SlideRecord::new("b.png", "B", ""),
        ],
        INTERVAL,
        now,
    );

    slideshow.destroy();
    assert!(!slideshow.handle_input(Input::NextControl, now));
    assert!(!slideshow.tick(now + INTERVAL * 2));
    assert_eq!(slideshow.current_index(), 0);
}
