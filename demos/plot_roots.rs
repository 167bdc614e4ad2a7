//! Plot the 12th roots of `4 + 3i` as arrows from the origin, using the Plotly
//! renderer. The figure is written to `temp/roots.html`, open it in a browser.
//!
//! Run with `cargo run --example plot_roots`.

use rust_cplx::{
    complex, nth_roots,
    plot::{plot_vectors, PlotOptions, PlotTarget, PlotlySink},
    Complexes,
};

fn main() -> anyhow::Result<()> {
    simple_logger::init_with_level(log::Level::Debug)?;

    let Complexes::Flat(roots) = nth_roots(&Complexes::from(complex!(4.0, 3.0)), 12)? else {
        unreachable!("roots of a scalar are a flat list");
    };

    std::fs::create_dir_all("temp")?;
    let mut sink = PlotlySink::new(PlotTarget::Html("temp/roots.html".into()))
        .with_options(PlotOptions::default().with_title("12th roots of 4+3i"));
    plot_vectors(&roots, true, &mut sink)?;
    Ok(())
}
