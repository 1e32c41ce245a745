// File: crates/chart-core/tests/scenarios.rs
// Purpose: Reference scenarios and per-bar properties of the render pipeline.

use flights_chart_core::{render, Dataset, LinearScale, ParseOptions, RenderOptions, Theme};

fn reference_scale(max: f64) -> LinearScale {
    let mut s = LinearScale::vertical(350.0);
    s.set_domain(0.0, max).expect("fresh scale");
    s
}

#[test]
fn scenario_a_single_peak() {
    let ds = Dataset::from_counts(&[5.0, 12.0, 5.0]);
    let scene = render(&ds, &RenderOptions::default()).expect("render");
    let theme = Theme::default();

    assert_eq!(scene.max_value, Some(12.0));
    assert_eq!(scene.bar_width, Some(320.0));
    assert_eq!(scene.groups.len(), 3);

    assert_eq!(scene.groups[0].rect.fill, theme.bar);
    assert_eq!(scene.groups[1].rect.fill, theme.highlight);
    assert_eq!(scene.groups[2].rect.fill, theme.bar);

    let scale = reference_scale(12.0);
    assert_eq!(scene.groups[1].rect.height, 350.0 - scale.apply(12.0).unwrap());
    assert_eq!(scene.groups[1].rect.height, 350.0);
}

#[test]
fn scenario_b_single_record() {
    let ds = Dataset::from_counts(&[7.0]);
    let scene = render(&ds, &RenderOptions::default()).expect("render");
    assert_eq!(scene.groups.len(), 1);
    assert_eq!(scene.bar_width, Some(960.0));
    let g = &scene.groups[0];
    assert!(g.rect.highlighted);
    assert_eq!(g.offset_x, 0.0);
    assert_eq!(g.rect.width, 959.0);
    assert_eq!(g.rect.height, 350.0);
}

#[test]
fn scenario_c_empty_dataset() {
    let scene = render(&Dataset::default(), &RenderOptions::default()).expect("empty render must not fail");
    assert!(scene.is_empty());
    assert_eq!(scene.max_value, None);
    assert_eq!(scene.bar_width, None);
}

#[test]
fn per_bar_properties_hold() {
    let counts = [3.0, 41.5, 0.0, 17.0, 41.5, 8.25, 29.0];
    let ds = Dataset::from_counts(&counts);
    let scene = render(&ds, &RenderOptions::default()).expect("render");
    let max = 41.5;
    let scale = reference_scale(max);
    let bar_width = 960.0 / counts.len() as f64;
    let theme = Theme::default();

    assert_eq!(scene.groups.len(), counts.len());
    for (i, (g, &c)) in scene.groups.iter().zip(counts.iter()).enumerate() {
        assert_eq!(g.index, i, "groups keep dataset order");
        assert_eq!(g.offset_x, i as f64 * bar_width);
        assert_eq!(g.rect.height, 350.0 - scale.apply(c).unwrap());
        assert!(g.rect.height >= 0.0);
        assert_eq!(g.rect.width, bar_width - 1.0);
        assert_eq!(g.rect.highlighted, c == max);
        assert_eq!(g.rect.fill, if c == max { theme.highlight } else { theme.bar });
        assert_eq!(g.label.text, c.to_string());
        assert_eq!(g.label.x, bar_width / 2.0);
        assert_eq!(g.label.y, g.rect.y + 3.0);
    }
    assert_eq!(scene.highlighted().count(), 2);
}

#[test]
fn custom_canvas_size() {
    let opts = RenderOptions { width: 400, height: 100, ..RenderOptions::default() };
    let ds = Dataset::from_counts(&[1.0, 2.0, 4.0, 8.0]);
    let scene = render(&ds, &opts).expect("render");
    assert_eq!((scene.width, scene.height), (400, 100));
    assert_eq!(scene.bar_width, Some(100.0));
    assert_eq!(scene.groups[3].rect.height, 100.0);
    assert_eq!(scene.groups[2].rect.height, 50.0);
    assert_eq!(scene.groups[0].rect.y, 87.5);
}

#[test]
fn labels_use_number_form_not_payload_spelling() {
    let payload = r#"[{"total_flights": 12.0}, {"total_flights": 1e3},
        {"total_flights": {"$numberDouble": "485151.0"}}]"#;
    let ds = Dataset::from_json_str(payload, &ParseOptions::default()).expect("parse");
    let scene = render(&ds, &RenderOptions::default()).expect("render");
    let labels: Vec<_> = scene.groups.iter().map(|g| g.label.text.as_str()).collect();
    assert_eq!(labels, ["12", "1000", "485151"]);
}
