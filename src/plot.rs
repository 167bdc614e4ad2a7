//! Drawing complex numbers as vectors from the origin.
//!
//! [`plot_vectors`] only computes the geometry; the drawing itself is done by
//! a [`VectorSink`]. [`RecordingSink`] keeps the requests in memory, and with
//! the `plotly` feature [`PlotlySink`] renders them as an interactive figure.

use itertools::Itertools;
use num::Complex;

use crate::{
    norm::max_norm_of_collection, util::doc_macros::errors_empty_collection, RealScalar, Result,
};

#[cfg(feature = "plotly")]
mod plotly_sink;
#[cfg(feature = "plotly")]
pub use plotly_sink::{PlotOptions, PlotTarget, PlotlySink};

/// A rendering surface able to draw arrows.
pub trait VectorSink<T> {
    /// Draw one arrow per pair of origin and delta. Arrow lengths are the
    /// deltas measured in data units, multiplied by `scale`.
    ///
    /// # Errors
    /// Backend specific
    fn draw_vectors(&mut self, origins: &[(T, T)], deltas: &[(T, T)], scale: T) -> Result<()>;

    /// Fix the visible range of both axes as `(min, max)` pairs.
    ///
    /// # Errors
    /// Backend specific
    fn set_axis_range(&mut self, x: (T, T), y: (T, T)) -> Result<()>;

    /// Show or write out everything drawn so far.
    ///
    /// # Errors
    /// Backend specific
    fn render(&mut self) -> Result<()>;
}

/// One call received by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum SinkEvent<T> {
    Vectors {
        origins: Vec<(T, T)>,
        deltas: Vec<(T, T)>,
        scale: T,
    },
    AxisRange {
        x: (T, T),
        y: (T, T),
    },
    Render,
}

/// Headless sink that records every request, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink<T> {
    events: Vec<SinkEvent<T>>,
}

impl<T> RecordingSink<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { events: vec![] }
    }

    #[must_use]
    pub fn events(&self) -> &[SinkEvent<T>] {
        &self.events
    }
}

impl<T: Clone> VectorSink<T> for RecordingSink<T> {
    fn draw_vectors(&mut self, origins: &[(T, T)], deltas: &[(T, T)], scale: T) -> Result<()> {
        self.events.push(SinkEvent::Vectors {
            origins: origins.to_vec(),
            deltas: deltas.to_vec(),
            scale,
        });
        Ok(())
    }

    fn set_axis_range(&mut self, x: (T, T), y: (T, T)) -> Result<()> {
        self.events.push(SinkEvent::AxisRange { x, y });
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.events.push(SinkEvent::Render);
        Ok(())
    }
}

/// Draw every complex number as an arrow from `(0, 0)` to `(re, im)`, one
/// data unit per unit of length.
///
/// With `auto_scaling`, both axes are set to `[-m, m]` where `m` is the
/// largest magnitude, so that every arrow is visible and both axes share the
/// same scale. Without it no magnitude is computed, so an empty collection
/// renders an empty figure instead of failing.
///
/// # Examples
/// ```
/// use rust_cplx::{complex, plot::{plot_vectors, RecordingSink, SinkEvent}};
///
/// let mut sink = RecordingSink::new();
/// plot_vectors(&[complex!(3.0, 4.0), complex!(-1.0, 0.0)], true, &mut sink).unwrap();
/// assert_eq!(sink.events()[1], SinkEvent::AxisRange { x: (-5.0, 5.0), y: (-5.0, 5.0) });
/// assert_eq!(sink.events()[2], SinkEvent::Render);
/// ```
///
/// # Errors
#[doc = errors_empty_collection!()]
/// The collection may only be empty when `auto_scaling` is off.
/// - `Other`: the sink failed.
pub fn plot_vectors<T: RealScalar, S: VectorSink<T> + ?Sized>(
    values: &[Complex<T>],
    auto_scaling: bool,
    sink: &mut S,
) -> Result<()> {
    let range = if auto_scaling {
        let max = max_norm_of_collection(values)?;
        log::debug!("auto-scaling axes to [-{max}, {max}]");
        Some((-max, max))
    } else {
        None
    };

    let origins = vec![(T::zero(), T::zero()); values.len()];
    let deltas = values.iter().map(|z| (z.re, z.im)).collect_vec();
    sink.draw_vectors(&origins, &deltas, T::one())?;
    if let Some(range) = range {
        sink.set_axis_range(range, range)?;
    }
    sink.render()
}

#[cfg(test)]
mod test {
    use super::{plot_vectors, RecordingSink, SinkEvent, VectorSink};
    use crate::{Error, Result};

    #[test]
    fn geometry() {
        let mut sink = RecordingSink::new();
        plot_vectors(&[complex!(1.0, 2.0), complex!(-3.0, 0.5)], true, &mut sink).unwrap();
        let max = complex!(1.0f64, 2.0).norm().max(complex!(-3.0f64, 0.5).norm());
        assert_eq!(
            sink.events(),
            &[
                SinkEvent::Vectors {
                    origins: vec![(0.0, 0.0), (0.0, 0.0)],
                    deltas: vec![(1.0, 2.0), (-3.0, 0.5)],
                    scale: 1.0,
                },
                SinkEvent::AxisRange {
                    x: (-max, max),
                    y: (-max, max),
                },
                SinkEvent::Render,
            ]
        );
    }

    #[test]
    fn no_auto_scaling() {
        let mut sink = RecordingSink::new();
        plot_vectors(&[complex!(1.0f32, 2.0)], false, &mut sink).unwrap();
        assert_eq!(sink.events().len(), 2);
        assert!(!sink
            .events()
            .iter()
            .any(|e| matches!(e, SinkEvent::AxisRange { .. })));
    }

    #[test]
    fn empty_with_auto_scaling() {
        let mut sink = RecordingSink::<f64>::new();
        assert!(matches!(
            plot_vectors(&[], true, &mut sink),
            Err(Error::EmptyCollection("max_norm"))
        ));
        // nothing drawn on failure
        assert!(sink.events().is_empty());
    }

    #[test]
    fn empty_without_auto_scaling() {
        let mut sink = RecordingSink::<f64>::new();
        plot_vectors(&[], false, &mut sink).unwrap();
        assert_eq!(
            sink.events(),
            &[
                SinkEvent::Vectors {
                    origins: vec![],
                    deltas: vec![],
                    scale: 1.0,
                },
                SinkEvent::Render,
            ]
        );
    }

    struct FailingSink;

    impl VectorSink<f64> for FailingSink {
        fn draw_vectors(&mut self, _: &[(f64, f64)], _: &[(f64, f64)], _: f64) -> Result<()> {
            Err(anyhow::anyhow!("device unplugged").into())
        }

        fn set_axis_range(&mut self, _: (f64, f64), _: (f64, f64)) -> Result<()> {
            Ok(())
        }

        fn render(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_propagate() {
        let err = plot_vectors(&[complex!(1.0)], true, &mut FailingSink).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
        assert_eq!(err.to_string(), "device unplugged");
    }
}
