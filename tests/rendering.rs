use listadapter::adapter::{handle_event, Action, Event, ListAdapter};
use listadapter::domain::{Item, Record};
use listadapter::ui::image::AssetImageLoader;
use listadapter::ui::renderer::{render, AnsiRenderer, RowRenderer};
use listadapter::ui::{Color, LayoutSpec, Theme};
use listadapter::Config;

fn config() -> Config {
    Config {
        layout: LayoutSpec::Name("image-two-text".into()),
        background_color: Color::from_rgb(10, 10, 10),
        selection_color: Color::from_rgb(200, 0, 100),
        ..Config::default()
    }
}

#[test]
fn selected_rows_paint_with_the_selection_color() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.png"), b"\x89PNG").unwrap();

    let items = vec![
        Item::Record(Record::new("Alpha").with_description("first").with_image("a.png")),
        Item::Record(Record::new("Beta").with_image("missing.png")),
    ];
    let mut adapter = ListAdapter::new(items, &config());
    adapter.toggle_selection(1);

    let loader = AssetImageLoader::new(dir.path().to_str().unwrap());
    let mut renderer = AnsiRenderer::new(Vec::new(), 30, loader);
    render(&adapter, &mut renderer);
    let output = String::from_utf8(renderer.into_inner()).unwrap();

    let rows: Vec<&str> = output.lines().collect();
    assert!(rows[0].starts_with(&Theme::bg(Color::from_rgb(10, 10, 10))));
    assert!(rows[0].contains("[img] "));
    assert!(rows[0].contains("Alpha"));
    assert!(rows[1].contains("first"));

    let beta = rows.iter().find(|row| row.contains("Beta")).unwrap();
    assert!(beta.starts_with(&Theme::bg(Color::from_rgb(200, 0, 100))));
    assert!(beta.contains("[   ] "));
}

#[test]
fn host_loop_forwards_refreshes_and_clicks() {
    let items = ["red", "green", "blue", "grey"].map(Item::text).to_vec();
    let mut adapter = ListAdapter::new(items, &Config::default());
    let mut renderer = AnsiRenderer::new(Vec::new(), 20, AssetImageLoader::new("."));
    renderer.create_row(adapter.row_template());

    let mut clicked = Vec::new();
    let events = [
        Event::Filter("gr".into()),
        Event::ToggleSelection(0),
        Event::ToggleSelection(1),
        Event::Click(1),
    ];
    for event in &events {
        for action in handle_event(&mut adapter, event) {
            match action {
                Action::Refresh(refresh) => renderer.refresh(&refresh),
                Action::ItemClicked(index) => clicked.push(index),
            }
        }
    }

    assert_eq!(clicked, vec![3]);
    assert_eq!(adapter.selected_indices(), vec![3]);
    assert_eq!(renderer.stale_rows(), &[0, 1]);
    assert!(renderer.is_all_stale());

    render(&adapter, &mut renderer);
    assert!(!renderer.is_all_stale());
    assert!(renderer.stale_rows().is_empty());
}

#[test]
fn filtering_after_a_selection_marks_every_row_stale() {
    let items = ["apple", "banana", "cherry"].map(Item::text).to_vec();
    let mut adapter = ListAdapter::new(items, &Config::default());
    let mut renderer = AnsiRenderer::new(Vec::new(), 20, AssetImageLoader::new("."));
    render(&adapter, &mut renderer);

    for event in [Event::ToggleSelection(0), Event::Filter("b".into())] {
        for action in handle_event(&mut adapter, &event) {
            if let Action::Refresh(refresh) = action {
                renderer.refresh(&refresh);
            }
        }
    }

    assert!(renderer.is_all_stale());
    assert_eq!(renderer.stale_rows(), &[0, 1, 2]);
}
