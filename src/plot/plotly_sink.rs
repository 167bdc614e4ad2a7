use std::path::PathBuf;

use anyhow::Context;
use plotly::{
    common::{Mode, Title},
    layout::Axis,
    Layout, Plot, Scatter,
};

use super::VectorSink;
use crate::Result;

/// Where a [`PlotlySink`] sends the figure when rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlotTarget {
    /// Open the figure in the default web browser
    Browser,
    /// Write a standalone HTML page
    Html(PathBuf),
}

/// Figure settings for [`PlotlySink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotOptions {
    width: usize,
    height: usize,
    title: Option<String>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            title: None,
        }
    }
}

impl PlotOptions {
    /// Figure size in pixels. Keep it square if the axes should have the
    /// same scale on screen.
    #[must_use]
    pub const fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Renders vectors with [`plotly`], one line trace per vector.
pub struct PlotlySink {
    target: PlotTarget,
    options: PlotOptions,
    plot: Plot,
    range: Option<((f64, f64), (f64, f64))>,
}

impl PlotlySink {
    #[must_use]
    pub fn new(target: PlotTarget) -> Self {
        Self {
            target,
            options: PlotOptions::default(),
            plot: Plot::new(),
            range: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: PlotOptions) -> Self {
        self.options = options;
        self
    }

    /// The figure built so far, layout is only applied on render
    #[must_use]
    pub const fn plot(&self) -> &Plot {
        &self.plot
    }

    fn layout(&self) -> Layout {
        let mut x_axis = Axis::new().zero_line(true);
        let mut y_axis = Axis::new().zero_line(true);
        if let Some(((x_min, x_max), (y_min, y_max))) = self.range {
            x_axis = x_axis.range(vec![x_min, x_max]);
            y_axis = y_axis.range(vec![y_min, y_max]);
        }
        let mut layout = Layout::new()
            .width(self.options.width)
            .height(self.options.height)
            .show_legend(false)
            .x_axis(x_axis)
            .y_axis(y_axis);
        if let Some(title) = &self.options.title {
            layout = layout.title(Title::with_text(title.as_str()));
        }
        layout
    }
}

impl VectorSink<f64> for PlotlySink {
    fn draw_vectors(
        &mut self,
        origins: &[(f64, f64)],
        deltas: &[(f64, f64)],
        scale: f64,
    ) -> Result<()> {
        for (i, (&(x0, y0), &(dx, dy))) in origins.iter().zip(deltas).enumerate() {
            let xs = vec![x0, dx.mul_add(scale, x0)];
            let ys = vec![y0, dy.mul_add(scale, y0)];
            let trace = Scatter::new(xs, ys)
                .mode(Mode::LinesMarkers)
                .name(format!("z{i}").as_str());
            self.plot.add_trace(trace);
        }
        Ok(())
    }

    fn set_axis_range(&mut self, x: (f64, f64), y: (f64, f64)) -> Result<()> {
        self.range = Some((x, y));
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let layout = self.layout();
        self.plot.set_layout(layout);
        match &self.target {
            PlotTarget::Browser => {
                log::debug!("opening plot in browser");
                self.plot.show();
            }
            PlotTarget::Html(path) => {
                log::debug!("writing plot to {}", path.display());
                std::fs::write(path, self.plot.to_html())
                    .with_context(|| format!("could not write plot to {}", path.display()))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{PlotOptions, PlotTarget, PlotlySink};
    use crate::plot::plot_vectors;

    #[test]
    fn writes_html() {
        let path =
            std::env::temp_dir().join(format!("rust_cplx_plot_{}.html", std::process::id()));
        let mut sink = PlotlySink::new(PlotTarget::Html(path.clone()))
            .with_options(PlotOptions::default().with_title("unit roots"));
        plot_vectors(&[complex!(1.0, 0.0), complex!(0.0, 1.0)], true, &mut sink).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("scatter"));
        assert!(html.contains("unit roots"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn unwritable_path() {
        let path = std::env::temp_dir().join("rust_cplx_missing_dir").join("plot.html");
        let mut sink = PlotlySink::new(PlotTarget::Html(path));
        let err = plot_vectors(&[complex!(1.0, 0.0)], true, &mut sink).unwrap_err();
        assert!(err.to_string().starts_with("could not write plot to"));
    }
}
