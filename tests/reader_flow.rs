//! End-to-end reader flow: manifest navigation, pagination, and settings
//! persistence wired together the way an embedding reading-flow
//! controller would.

mod common;

use amnesia_reader::{
    manifest::resolve, BookSettings, ColumnsPaginator, JsonFileStore, Manifest, MemoryStore,
    Paginator, ScrollingPaginator, SettingsChange, StartPosition,
};

use common::{init_tracing, MockTarget, MANIFEST_JSON, MANIFEST_URL};

fn views() -> Vec<Box<dyn Paginator>> {
    vec![
        Box::new(ColumnsPaginator::new()),
        Box::new(ScrollingPaginator::new()),
    ]
}

#[tokio::test]
async fn pages_through_a_chapter_and_follows_the_spine() {
    init_tracing();
    let manifest = Manifest::from_json(MANIFEST_JSON, MANIFEST_URL).unwrap();

    // Reading starts at the canonical first spine entry
    let start = manifest.start_link().unwrap();
    let mut current = resolve(manifest.base_url(), start.href.as_deref().unwrap());
    assert_eq!(current, "https://example.com/pub/whale/ch1.xhtml");

    // Page to the end of the rendered chapter
    let mut target = MockTarget::new(1600.0, 400.0);
    let mut view = ColumnsPaginator::new();
    view.start(&mut target, StartPosition::FirstPage).await.unwrap();

    let mut pages = 1;
    while !view.on_last_page(&target) {
        view.go_to_next_page(&mut target);
        pages += 1;
    }
    assert_eq!(pages, 4);

    // End of chapter: the controller advances along the spine
    let next = manifest.next_spine_item(&current).unwrap();
    current = resolve(manifest.base_url(), next.href.as_deref().unwrap());
    assert_eq!(current, "https://example.com/pub/whale/ch2.xhtml");

    // Paging backwards into the previous chapter lands on its last page
    let previous = manifest.previous_spine_item(&current).unwrap();
    assert_eq!(previous.href.as_deref(), Some("ch1.xhtml"));

    let mut target = MockTarget::new(1600.0, 400.0);
    view.start(&mut target, StartPosition::LastPage).await.unwrap();
    assert_eq!(target.left_px, -1200.0);
    assert!(view.on_last_page(&target));
}

#[tokio::test]
async fn reaching_the_spine_ends_stops_navigation() {
    init_tracing();
    let manifest = Manifest::from_json(MANIFEST_JSON, MANIFEST_URL).unwrap();
    let first = resolve(manifest.base_url(), "ch1.xhtml");
    let last = resolve(manifest.base_url(), "ch3.xhtml");

    assert!(manifest.previous_spine_item(&first).is_none());
    assert!(manifest.next_spine_item(&last).is_none());
}

#[tokio::test]
async fn settings_survive_a_restart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reader-settings.json");

    {
        let store = JsonFileStore::open(&path).await.unwrap();
        let mut settings =
            BookSettings::create(Box::new(store), views(), vec![12, 14, 16, 18, 20], None)
                .await
                .unwrap();

        assert!(settings.increase_font_size().await.unwrap());
        let mut target = MockTarget::new(1600.0, 400.0);
        settings.select_view(&mut target, "scrolling").await.unwrap();
    }

    // A fresh settings component over the same file restores both axes
    let store = JsonFileStore::open(&path).await.unwrap();
    let settings =
        BookSettings::create(Box::new(store), views(), vec![12, 14, 16, 18, 20], None)
            .await
            .unwrap();

    assert_eq!(settings.selected_view().name(), "scrolling");
    assert_eq!(settings.font_size(), 18);
}

#[tokio::test]
async fn view_switch_keeps_the_reading_position() {
    init_tracing();
    let mut settings = BookSettings::create(
        Box::new(MemoryStore::new()),
        views(),
        vec![12, 14, 16, 18, 20],
        Some(16),
    )
    .await
    .unwrap();

    let mut target = MockTarget::new(2000.0, 400.0);
    settings
        .selected_view_mut()
        .start(&mut target, StartPosition::FirstPage)
        .await
        .unwrap();
    settings.selected_view_mut().go_to_next_page(&mut target);
    settings.selected_view_mut().go_to_next_page(&mut target);
    settings.selected_view_mut().go_to_next_page(&mut target);
    assert_eq!(target.left_px, -1200.0);

    settings.select_view(&mut target, "scrolling").await.unwrap();

    // Three viewport units advanced, now measured vertically
    assert_eq!(target.scroll_top_px, 1800.0);
    assert_eq!(settings.selected_view().current_position(&target), 3.0);

    // Switching back re-enters column pagination on the same page
    settings.select_view(&mut target, "columns").await.unwrap();
    assert_eq!(target.left_px, -1200.0);
}

#[tokio::test]
async fn observers_see_every_effective_change() {
    init_tracing();
    use std::sync::{Arc, Mutex};

    let changes: Arc<Mutex<Vec<SettingsChange>>> = Arc::new(Mutex::new(Vec::new()));
    let mut settings = BookSettings::create(
        Box::new(MemoryStore::new()),
        views(),
        vec![14, 16],
        Some(14),
    )
    .await
    .unwrap();

    let seen = changes.clone();
    settings.on_change(move |change| {
        seen.lock().unwrap().push(change.clone());
    });

    assert!(settings.increase_font_size().await.unwrap());
    assert!(!settings.increase_font_size().await.unwrap()); // top of the set
    let mut target = MockTarget::new(1600.0, 400.0);
    settings.select_view(&mut target, "scrolling").await.unwrap();

    let changes = changes.lock().unwrap();
    assert_eq!(
        *changes,
        vec![
            SettingsChange::FontSize { px: 16 },
            SettingsChange::View { name: "scrolling" },
        ]
    );
}

#[tokio::test]
async fn font_controls_disable_exactly_at_the_boundaries() {
    init_tracing();
    let mut settings = BookSettings::create(
        Box::new(MemoryStore::new()),
        views(),
        vec![12, 14, 16],
        Some(12),
    )
    .await
    .unwrap();

    assert!(!settings.can_decrease_font_size());
    assert!(settings.can_increase_font_size());

    assert!(settings.increase_font_size().await.unwrap());
    assert!(settings.can_decrease_font_size());
    assert!(settings.can_increase_font_size());

    assert!(settings.increase_font_size().await.unwrap());
    assert!(settings.can_decrease_font_size());
    assert!(!settings.can_increase_font_size());
}
