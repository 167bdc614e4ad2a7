use rust_cplx::{
    complex, max_norm, min_norm, norm, nth_roots, plot::RecordingSink, plot_vectors,
    polynomial_from_roots, round_complex, Complexes, Error, Extremum, Norms, DEFAULT_DIGITS,
};

#[test]
fn round_to_three_decimals() {
    let c = Complexes::from(complex!(1.234_567_890_12, 3.987_654_321_09));
    assert_eq!(
        round_complex(&c, 3),
        Complexes::Scalar(complex!(1.235, 3.988))
    );
}

#[test]
fn round_nested_with_default_digits() {
    let c = Complexes::from(vec![
        vec![complex!(1.0 / 3.0, 2.0 / 3.0)],
        vec![complex!(0.5, -0.25), complex!(1E-11, -1E-11)],
    ]);
    assert_eq!(
        round_complex(&c, DEFAULT_DIGITS),
        Complexes::Nested(vec![
            vec![complex!(0.333_333_333_3, 0.666_666_666_7)],
            vec![complex!(0.5, -0.25), complex!(0.0, -0.0)],
        ])
    );
}

#[test]
fn square_roots_of_one() {
    let _ = simple_logger::init_with_level(log::Level::Debug);
    let Complexes::Flat(roots) = nth_roots(&Complexes::from(complex!(1.0, 0.0)), 2).unwrap() else {
        panic!("expected flat output");
    };
    assert_eq!(roots.len(), 2);
    assert!((roots[0] - complex!(1.0, 0.0)).norm() < 1E-15);
    assert!((roots[1] - complex!(-1.0, 0.0)).norm() < 1E-15);
}

#[test]
fn zero_degree_is_rejected() {
    let err = nth_roots(&Complexes::from(complex!(1.0, 0.0)), 0).unwrap_err();
    assert!(matches!(err, Error::ZeroDegree));
}

#[test]
fn negative_degree_yields_no_roots() {
    let c = Complexes::from(vec![complex!(1.0, 0.0), complex!(-4.0, 0.0)]);
    assert_eq!(
        nth_roots(&c, -2).unwrap(),
        Complexes::Nested(vec![vec![], vec![]])
    );
}

#[test]
fn norm_of_pythagorean_triple() {
    let c = Complexes::from(vec![complex!(3.0, 4.0), complex!(0.0, 0.0)]);
    assert_eq!(norm(&c).unwrap(), Norms::Flat(vec![5.0, 0.0]));
    assert_eq!(min_norm(&c).unwrap(), Extremum::Norm(0.0));
    assert_eq!(max_norm(&c).unwrap(), Extremum::Norm(5.0));
}

#[test]
fn difference_of_squares() {
    let roots = Complexes::from(vec![complex!(1.0, 0.0), complex!(-1.0, 0.0)]);
    let p = polynomial_from_roots(&roots).unwrap();
    assert_eq!(p.to_string(), "x**2 - 1");
}

#[test]
fn cube_roots_of_unity_expand_back() {
    let Complexes::Flat(roots) = nth_roots(&Complexes::from(complex!(1.0, 0.0)), 3).unwrap() else {
        panic!("expected flat output");
    };
    let p = polynomial_from_roots(&Complexes::from(roots)).unwrap();
    // x**3 - 1, up to rounding noise
    let coeffs = p.as_slice();
    assert_eq!(coeffs.len(), 4);
    assert!((coeffs[0] - complex!(-1.0, 0.0)).norm() < 1E-12);
    assert!(coeffs[1].norm() < 1E-12);
    assert!(coeffs[2].norm() < 1E-12);
    assert_eq!(coeffs[3], complex!(1.0, 0.0));
}

#[test]
fn plot_unit_roots_headless() {
    let Complexes::Flat(roots) = nth_roots(&Complexes::from(complex!(0.0, 8.0)), 3).unwrap() else {
        panic!("expected flat output");
    };
    let mut sink = RecordingSink::<f64>::new();
    plot_vectors(&roots, true, &mut sink).unwrap();
    assert_eq!(sink.events().len(), 3);
    let rust_cplx::plot::SinkEvent::AxisRange { x, y } = sink.events()[1] else {
        panic!("expected axis range");
    };
    assert!((x.1 - 2.0).abs() < 1E-12);
    assert_eq!(x, y);
    assert_eq!(x.0, -x.1);
}
