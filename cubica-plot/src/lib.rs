use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoint, Points};

/// A runnable egui application for plotting curves and point markers.
///
/// Knows nothing about polynomials: it consumes named series of plain
/// `[x, y]` pairs, drawing each either as a connected line or as
/// discrete markers (used for root locations).
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
}

struct Series {
    name: String,
    kind: SeriesKind,
    points: Vec<PlotPoint>,
}

enum SeriesKind {
    Line,
    Markers,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named series drawn as a connected line.
    #[must_use]
    pub fn add_series(self, name: &str, points: &[[f64; 2]]) -> Self {
        self.add(name, SeriesKind::Line, points)
    }

    /// Adds a named series drawn as discrete markers.
    #[must_use]
    pub fn add_markers(self, name: &str, points: &[[f64; 2]]) -> Self {
        self.add(name, SeriesKind::Markers, points)
    }

    fn add(mut self, name: &str, kind: SeriesKind, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            kind,
            points: points.iter().copied().map(Into::into).collect(),
        });

        self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("plot-id")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for series in &self.series {
                        let points = series.points.as_slice();
                        let name = &series.name;

                        match series.kind {
                            SeriesKind::Line => plot_ui.line(Line::new(points).name(name)),
                            SeriesKind::Markers => {
                                plot_ui.points(Points::new(points).radius(4.0).name(name));
                            }
                        }
                    }
                });
        });
    }
}
