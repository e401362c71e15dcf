use itertools::Itertools;
use std::{collections::HashMap, error::Error, path::Path, time::Duration};

use plotters::prelude::*;

/// Plots, per engine, the sorted runtimes of the instances it solved.
/// Engines are drawn and listed in the legend in alphabetical order, so colors stay
/// stable across runs even though `measurement` is a `HashMap`.
pub fn plot_runtimes(
    measurement: &HashMap<String, Vec<Duration>>,
    path: impl AsRef<Path>,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let drawing_area = SVGBackend::new(path.as_ref(), size).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let max_instances = measurement
        .values()
        .map(|vec| vec.len())
        .max()
        .ok_or("Measurement was empty!")?;

    let max_duration = measurement
        .values()
        .filter_map(|vec| vec.iter().max())
        .max()
        .map_or(1, |duration| (duration.as_millis() as u64).max(1));

    let mut chart = ChartBuilder::on(&drawing_area)
        .x_label_area_size(30)
        .y_label_area_size(80)
        .margin(20)
        .build_cartesian_2d(0..max_instances.max(1), 0..max_duration)?;

    chart
        .configure_mesh()
        .x_desc("Number of solved instances")
        .y_desc("Time [ms]")
        .draw()?;

    let mut colors = vec![
        (255, 0, 0),
        (0, 255, 0),
        (0, 255, 255),
        (0, 0, 255),
        (255, 0, 255),
    ]
    .into_iter()
    .cycle();
    for (name, times) in measurement.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)) {
        let (r, g, b) = colors.next().unwrap_or((0, 0, 0));
        let line_color = RGBColor(r, g, b);
        let point_color = RGBColor(r, g, b);

        let y = sorted_millis(times);

        let points = PointSeries::of_element(
            y.iter().cloned().enumerate(),
            5,
            &point_color,
            &|c, s, st| Circle::new(c, s, st),
        );
        chart.draw_series(points)?;

        let lines = LineSeries::new(y.into_iter().enumerate(), &line_color);
        chart
            .draw_series(lines)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x - 20, y)], &line_color));
    }
    chart.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .margin(5)
        .draw()?;
    Ok(())
}

/// Runtimes in whole milliseconds, fastest first: the y values of one engine's curve
fn sorted_millis(times: &[Duration]) -> Vec<u64> {
    times
        .iter()
        .map(|duration| duration.as_millis() as u64)
        .sorted()
        .collect()
}

#[cfg(test)]
mod test {
    use super::{plot_runtimes, sorted_millis};
    use std::collections::HashMap;
    use std::time::Duration;

    #[test]
    fn plotting() {
        let mut map = HashMap::new();
        map.insert(
            "dpll".to_string(),
            vec![10, 5, 7, 9, 200, 3]
                .into_iter()
                .map(Duration::from_millis)
                .collect(),
        );
        map.insert(
            "resolution".to_string(),
            vec![1, 300, 240, 7, 50, 200, 3]
                .into_iter()
                .map(Duration::from_millis)
                .collect(),
        );

        let path = std::env::temp_dir().join("solver-bench-plotting.svg");
        plot_runtimes(&map, &path, (1280, 720)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn curves_rise() {
        let times = vec![Duration::from_micros(7_900), Duration::from_millis(2), Duration::from_secs(1)];
        assert_eq!(sorted_millis(&times), vec![2, 7, 1000]);
    }

    #[test]
    fn nothing_to_plot() {
        let path = std::env::temp_dir().join("solver-bench-empty.svg");
        assert!(plot_runtimes(&HashMap::new(), &path, (640, 480)).is_err());
    }
}
