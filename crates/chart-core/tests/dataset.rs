// File: crates/chart-core/tests/dataset.rs
// Purpose: Fixed dataset contents and validation of custom point sets.

use hilbert_chart_core::{Category, ChartError, Dataset, Point, Theme};

#[test]
fn hilbert_dataset_matches_milestones() {
    let d = Dataset::hilbert();
    assert_eq!(d.len(), 7);
    assert_eq!(d.dimensions(), vec![2, 3, 4, 5, 6, 7, 8]);
    let values: Vec<f64> = d.points().iter().map(|p| p.value).collect();
    assert_eq!(values, vec![13.0, 13.0, 2500.0, 2500.0, 50000.0, 50000.0, 531441.0]);
    let cats: Vec<Category> = d.points().iter().map(|p| p.category).collect();
    assert_eq!(
        cats,
        vec![
            Category::Start,
            Category::Stuck,
            Category::Breakthrough,
            Category::Stuck,
            Category::Breakthrough,
            Category::Stuck,
            Category::Final,
        ]
    );
    assert_eq!(d.value_range(), (13.0, 531441.0));
}

#[test]
fn step_values_never_decrease() {
    let xy = Dataset::hilbert().xy();
    for w in xy.windows(2) {
        assert!(w[1].0 > w[0].0);
        assert!(w[1].1 >= w[0].1, "{:?} -> {:?}", w[0], w[1]);
    }
}

#[test]
fn every_category_has_a_style() {
    let theme = Theme::paper();
    for c in Category::ALL {
        let s = theme.category_style(c);
        assert!(s.base_size > 0.0, "{}", c.name());
    }
    let final_style = theme.category_style(Category::Final);
    assert!(final_style.edge_color.is_some());
}

#[test]
fn labels_are_two_lines() {
    for p in Dataset::hilbert().points() {
        assert_eq!(p.label.lines().count(), 2, "{:?}", p.label);
    }
}

#[test]
fn rejects_empty_unordered_and_non_positive_sets() {
    assert!(matches!(Dataset::new(Vec::new()), Err(ChartError::InvalidDataset(_))));

    let unordered = vec![
        Point::new(3, 1.0, Category::Start, "a"),
        Point::new(2, 2.0, Category::Final, "b"),
    ];
    assert!(matches!(Dataset::new(unordered), Err(ChartError::InvalidDataset(_))));

    let zero = vec![Point::new(1, 0.0, Category::Start, "a")];
    assert!(matches!(Dataset::new(zero), Err(ChartError::InvalidDataset(_))));

    let ok = vec![
        Point::new(1, 1.0, Category::Start, "a"),
        Point::new(2, 10.0, Category::Final, "b"),
    ];
    assert_eq!(Dataset::new(ok).expect("valid").len(), 2);
}
